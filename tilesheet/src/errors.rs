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

use tilesheet_common::define_error;

pub type Result<T> = std::result::Result<T, TilesheetError>;

define_error!{ pub TilesheetError =
    ImageError(#[from] image::ImageError) : "Image error {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    SerdeError(#[from] serde_json::Error) : "serialization/deserialization error: {0}",
    ConfigError(#[from] ron::error::SpannedError) : "config error: {0}",
    InvalidArgument(String) : "invalid argument: {0}",
    FileNotFound(String) : "file not found: {0}",
    InvalidDirectory(String) : "directory invalid: {0}",
    InvalidNameMap(String) : "invalid name map or file: {0}",
    FileInvalid(String) : "file or file data invalid: {0}",
    BitmapOpenFailure(String) : "could not open bitmap: {0}",
    GeometryError(String) : "invalid tile geometry: {0}",
    UncleanScale(String) : "unable to ensmallen image cleanly: {0}",
    ResultTooSmall(String) : "resulting bitmap would be too small: {0}",
    OpFailed(String) : "operation failed: {0}"
}

pub fn invalid_argument (msg: impl ToString)->TilesheetError { TilesheetError::InvalidArgument( msg.to_string()) }
pub fn file_not_found (msg: impl ToString)->TilesheetError { TilesheetError::FileNotFound( msg.to_string()) }
pub fn invalid_directory (msg: impl ToString)->TilesheetError { TilesheetError::InvalidDirectory( msg.to_string()) }
pub fn geometry_error (msg: impl ToString)->TilesheetError { TilesheetError::GeometryError( msg.to_string()) }
