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

use std::{fmt, path::{Path,PathBuf}};
use image::{imageops::FilterType, DynamicImage, GenericImageView};
use tracing::info;
use tilesheet_common::fs::{extension, filestem, parent_dir, remove_existing_file};
use crate::config::TilesheetConfig;
use crate::errors::{Result,TilesheetError,file_not_found,invalid_argument};
use crate::image_file::open_image_with_format;

#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum ScaleDirection {
    Enbiggen,
    Ensmallen
}

impl fmt::Display for ScaleDirection {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            ScaleDirection::Enbiggen => write!(f, "Enbiggen"),
            ScaleDirection::Ensmallen => write!(f, "Ensmallen"),
        }
    }
}

pub fn check_scale (scale: u32, config: &TilesheetConfig)->Result<()> {
    if config.is_valid_scale( scale) {
        Ok(())
    } else {
        Err( invalid_argument( format!("scale {scale} not within [{},{}]", config.min_scale, config.max_scale)))
    }
}

/// nearest neighbor resize of `img` by an integer factor. Ensmallening requires that both
/// width and height are divisible by `scale` and that the result is not below `min_shrink_size`
pub fn scale_image (img: &DynamicImage, scale: u32, direction: ScaleDirection, config: &TilesheetConfig)->Result<DynamicImage> {
    check_scale( scale, config)?;
    let (w,h) = img.dimensions();

    let (new_width, new_height) = match direction {
        ScaleDirection::Enbiggen => {
            let nw = w.checked_mul( scale);
            let nh = h.checked_mul( scale);
            match (nw,nh) {
                (Some(nw),Some(nh)) => (nw,nh),
                _ => return Err( invalid_argument( format!("{w}x{h} image too large to scale by {scale}")))
            }
        }
        ScaleDirection::Ensmallen => {
            if w % scale > 0 || h % scale > 0 {
                return Err( TilesheetError::UncleanScale( format!("{w}x{h} not divisible by {scale}")))
            }
            let (nw,nh) = (w / scale, h / scale);
            if nw < config.min_shrink_size || nh < config.min_shrink_size {
                return Err( TilesheetError::ResultTooSmall( format!("{nw}x{nh} is below {}", config.min_shrink_size)))
            }
            (nw,nh)
        }
    };

    Ok( img.resize_exact( new_width, new_height, FilterType::Nearest) )
}

/// the default target if none is given: `<stem>_<direction>.<ext>`
pub fn default_target_file (source_file: &Path, direction: ScaleDirection)->PathBuf {
    let stem = filestem( &source_file).unwrap_or("image");
    let fname = match extension( &source_file) {
        Some(ext) => format!("{stem}_{direction}.{ext}"),
        None => format!("{stem}_{direction}")
    };
    source_file.with_file_name( fname)
}

/// scale `source_file` and store the result in the same image format. If no target is given we use
/// [`default_target_file`]. A target without directory goes next to the source. Existing targets are overwritten
pub fn scale_file<P> (source_file: P, target_file: Option<&Path>, scale: u32, direction: ScaleDirection, config: &TilesheetConfig)->Result<PathBuf>
    where P: AsRef<Path>
{
    let source_file = source_file.as_ref();
    if source_file.as_os_str().is_empty() {
        return Err( invalid_argument("no source file"))
    }
    check_scale( scale, config)?;

    if !source_file.is_file() {
        return Err( file_not_found( format!("{source_file:?}")))
    }

    let target_file = match target_file {
        Some(tgt) if !tgt.as_os_str().is_empty() => {
            match (parent_dir( &tgt), parent_dir( &source_file)) {
                (None, Some(src_dir)) => src_dir.join( tgt),
                _ => tgt.to_path_buf()
            }
        }
        _ => default_target_file( source_file, direction)
    };

    let (img, format) = open_image_with_format( source_file)?;

    let scaled = scale_image( &img, scale, direction, config)?;
    info!("{direction} {source_file:?} by {scale}: {:?} -> {:?}", img.dimensions(), scaled.dimensions());

    remove_existing_file( &target_file)?;
    match format {
        Some(format) => scaled.save_with_format( &target_file, format)?,
        None => scaled.save( &target_file)?
    }

    Ok( target_file )
}
