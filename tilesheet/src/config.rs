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

use std::path::Path;
use serde::{Serialize,Deserialize};
use tilesheet_common::fs::filepath_contents_as_string;
use crate::errors::{Result,file_not_found,invalid_argument};

/// tunable constants of tile operations, stored as RON, e.g.
/// ```text
/// TilesheetConfig(
///     image_extensions: ["png", "jpg", "jpeg", "gif"],
///     min_scale: 2,
///     max_scale: 8,
///     min_shrink_size: 16,
/// )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct TilesheetConfig {
    /// candidate extensions for join sampling (case-insensitive, sampled in this order)
    pub image_extensions: Vec<String>,

    /// inclusive range of integer scale factors. Small factors keep pixel art edges hard
    pub min_scale: u32,
    pub max_scale: u32,

    /// minimum width and height of an ensmallened image
    pub min_shrink_size: u32,
}

impl Default for TilesheetConfig {
    fn default()->Self {
        TilesheetConfig {
            image_extensions: vec!["png".into(), "jpg".into(), "jpeg".into(), "gif".into()],
            min_scale: 2,
            max_scale: 8,
            min_shrink_size: 16,
        }
    }
}

impl TilesheetConfig {
    pub fn open<P> (path: P)->Result<Self> where P: AsRef<Path> {
        let path = path.as_ref();
        if !path.is_file() { return Err( file_not_found( format!("config {path:?}"))) }

        let contents = filepath_contents_as_string( &path)?;
        let config: TilesheetConfig = ron::from_str( contents.as_str())?;
        config.check()?;
        Ok( config )
    }

    pub fn maybe_open<P> (opt_path: Option<P>)->Result<Self> where P: AsRef<Path> {
        match opt_path {
            Some(p) => Self::open( p),
            None => Ok( Self::default() )
        }
    }

    /// the scale range has to be non-empty and cannot include 0
    pub fn check (&self)->Result<()> {
        if self.min_scale == 0 || self.min_scale > self.max_scale {
            Err( invalid_argument( format!("invalid scale range [{},{}]", self.min_scale, self.max_scale)))
        } else {
            Ok(())
        }
    }

    pub fn is_valid_scale (&self, scale: u32)->bool {
        scale > 0 && scale >= self.min_scale && scale <= self.max_scale
    }
}
