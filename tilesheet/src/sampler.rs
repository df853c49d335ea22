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
use image::GenericImageView;
use regex::Regex;
use tracing::{debug,warn};
use tilesheet_common::fs::matching_files_in_dir;
use crate::errors::{Result,invalid_directory,invalid_argument};
use crate::geometry::Dim;
use crate::image_file::open_image;

/// the images of a directory that could be opened, and their maximum width/height
#[derive(Debug,Clone,Default,PartialEq)]
pub struct SampledImageSet {
    pub max_tile_size: Dim,
    pub files: Vec<PathBuf>
}

impl SampledImageSet {
    pub fn is_empty (&self)->bool { self.files.is_empty() }
    pub fn len (&self)->usize { self.files.len() }
}

/// non-recursive scan of `dir` for files with the given extensions. Candidates are grouped by
/// extension in the order of `extensions`, each group sorted by filename. Files that cannot be
/// decoded are dropped from the result, which is not an error. Only a missing dir is
pub fn sample_images<P,S> (dir: P, extensions: &[S])->Result<SampledImageSet> where P: AsRef<Path>, S: AsRef<str> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err( invalid_directory( format!("{dir:?}")))
    }

    let mut candidates: Vec<PathBuf> = Vec::new();
    for ext in extensions {
        let re = Regex::new( format!(r"(?i)^.+\.{}$", regex::escape( ext.as_ref())).as_str())
            .map_err( |e| invalid_argument( format!("image extension '{}': {e}", ext.as_ref())))?;
        let files = matching_files_in_dir( &dir, &re)?;
        for f in files {
            if !candidates.contains( &f) { candidates.push( f) }
        }
    }

    let mut width = 0;
    let mut height = 0;
    let mut files: Vec<PathBuf> = Vec::with_capacity( candidates.len());

    for path in candidates {
        match open_image( &path) {
            Ok(img) => {
                let (w,h) = img.dimensions();
                debug!("sampled {path:?}: {w}x{h}");
                width = width.max(w);
                height = height.max(h);
                files.push( path);
            }
            Err(e) => warn!("ignoring unreadable image {path:?}: {e}")
        }
    }

    Ok( SampledImageSet{ max_tile_size: Dim::new(width,height), files } )
}
