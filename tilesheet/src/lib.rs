/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

//! tilesheet processing: splitting a sheet into named tile images, joining tile images
//! into a sheet and integer scaling of pixel art.
//! This wraps the external 'image' crate for decoding, encoding and pixel copies

mod errors;
pub use errors::{Result,TilesheetError};

mod config;
pub use config::TilesheetConfig;

mod image_file;
pub use image_file::{open_image,open_image_with_format};

mod names;
pub use names::{NameEntry,NamesMap};

mod geometry;
pub use geometry::{Dim,TileGridSize,split_grid_size,join_grid_size};

mod sampler;
pub use sampler::{SampledImageSet,sample_images};

mod split;
pub use split::{SplitParams,SplitTile,split_tilesheet,split_image,tile_name,is_transparent};

mod join;
pub use join::{join_tiles,join_images,compose};

mod scale;
pub use scale::{ScaleDirection,scale_image,scale_file,check_scale,default_target_file};

mod cli;
pub use cli::{Mode,TilesheetArgs,completion_message};
