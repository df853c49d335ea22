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

use std::{fmt::Display, path::Path};
use image::{DynamicImage, ImageFormat, ImageReader};
use crate::errors::{Result,TilesheetError};

/// open and decode an image file. The decoder is chosen from the file contents, the extension is
/// only used if the contents are not recognized
pub fn open_image<P> (path: P)->Result<DynamicImage> where P: AsRef<Path> {
    open_image_with_format( path).map( |(img,_)| img)
}

/// like [`open_image`] but also answers the detected container format
pub fn open_image_with_format<P> (path: P)->Result<(DynamicImage,Option<ImageFormat>)> where P: AsRef<Path> {
    let path = path.as_ref();
    let reader = ImageReader::open( path)
        .and_then( |r| r.with_guessed_format())
        .map_err( |e| bitmap_open_failure( path, e))?;

    let format = reader.format();
    let img = reader.decode().map_err( |e| bitmap_open_failure( path, e))?;
    Ok( (img, format) )
}

fn bitmap_open_failure (path: &Path, e: impl Display)->TilesheetError {
    TilesheetError::BitmapOpenFailure( format!("{path:?}: {e}"))
}
