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

use std::path::{Path,PathBuf};
use image::{imageops, ImageFormat, RgbaImage};
use tracing::{info,warn};
use tilesheet_common::fs::{ensure_writable_dir, parent_dir};
use crate::config::TilesheetConfig;
use crate::errors::{Result,TilesheetError,invalid_argument,invalid_directory};
use crate::geometry::{Dim,TileGridSize,join_grid_size};
use crate::image_file::open_image;
use crate::sampler::{SampledImageSet,sample_images};

/// join the images of `source_dir` into a single tile map that is saved as PNG to `target_file`.
/// See [`join_grid_size`] for how `rows` and `cols` are interpreted
pub fn join_tiles<P,Q> (source_dir: P, target_file: Q, rows: i64, cols: i64, config: &TilesheetConfig)->Result<PathBuf>
    where P: AsRef<Path>, Q: AsRef<Path>
{
    let target_file = target_file.as_ref();
    if target_file.as_os_str().is_empty() {
        return Err( invalid_argument("no target file"))
    }

    if let Some(target_dir) = parent_dir( &target_file) {
        ensure_writable_dir( target_dir).map_err( |e| invalid_directory( format!("{target_dir:?}: {e}")))?;
    }

    let tile_map = join_images( source_dir, rows, cols, config)?;
    tile_map.save_with_format( target_file, ImageFormat::Png)?;
    info!("saved tile map {target_file:?}");

    Ok( target_file.to_path_buf() )
}

/// sample `source_dir` and compose its images into a new transparent canvas
pub fn join_images<P> (source_dir: P, rows: i64, cols: i64, config: &TilesheetConfig)->Result<RgbaImage> where P: AsRef<Path> {
    let source_dir = source_dir.as_ref();
    let sampled = sample_images( source_dir, config.image_extensions.as_slice())?;
    if sampled.is_empty() {
        return Err( TilesheetError::FileInvalid( format!("no readable images in {source_dir:?}")))
    }

    let grid = join_grid_size( sampled.len(), rows, cols)?;
    compose( &sampled, grid)
}

/// draw the sampled images at their native size into a grid of `max_tile_size` cells, filling rows
/// left to right. Images that fall outside of an under-sized grid are clipped
pub fn compose (sampled: &SampledImageSet, grid: TileGridSize)->Result<RgbaImage> {
    let Dim{ w: tile_width, h: tile_height } = sampled.max_tile_size;
    if grid.is_empty() || tile_width == 0 || tile_height == 0 {
        return Err( TilesheetError::GeometryError( format!("empty tile map: {grid} of {}", sampled.max_tile_size)))
    }
    if grid.capacity() < sampled.len() as u64 {
        warn!("tile map {grid} cannot hold all {} images", sampled.len());
    }

    let width = grid.columns.checked_mul( tile_width);
    let height = grid.rows.checked_mul( tile_height);
    let (Some(width),Some(height)) = (width,height) else {
        return Err( TilesheetError::GeometryError( format!("tile map {grid} of {} too large", sampled.max_tile_size)))
    };
    info!("tile map {grid}, image size {width}x{height}");

    let mut canvas = RgbaImage::new( width, height);
    let max_x = (width - tile_width) as i64;
    let mut x: i64 = 0;
    let mut y: i64 = 0;

    for path in &sampled.files {
        let tile = open_image( path)?.to_rgba8();
        imageops::replace( &mut canvas, &tile, x, y);

        x += tile_width as i64;
        if x > max_x {
            x = 0;
            y += tile_height as i64;
        }
    }

    Ok( canvas )
}
