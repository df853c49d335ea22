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
#![allow(unused)]

use std::{fs, path::Path};
use image::{ImageFormat, Rgba, RgbaImage, RgbImage, Rgb};
use tilesheet::{Dim, TilesheetConfig, TilesheetError, sample_images};

fn save_rgba (dir: &Path, name: &str, w: u32, h: u32) {
    RgbaImage::from_pixel( w, h, Rgba([255,0,0,255])).save( dir.join(name)).unwrap();
}

#[test]
fn test_sample_max_size() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    save_rgba( dir, "b.png", 16, 8);
    save_rgba( dir, "a.png", 8, 24);
    RgbImage::from_pixel( 12, 12, Rgb([0,0,255])).save( dir.join("c.jpg")).unwrap();

    let config = TilesheetConfig::default();
    let sampled = sample_images( dir, config.image_extensions.as_slice()).unwrap();

    assert_eq!( sampled.max_tile_size, Dim::new(16,24));
    let names: Vec<&str> = sampled.files.iter().filter_map( |f| f.file_name()?.to_str()).collect();
    assert_eq!( names, vec!["a.png", "b.png", "c.jpg"]); // extension groups, each sorted
}

#[test]
fn test_sample_skips_unreadable_and_other_files() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    save_rgba( dir, "good.png", 4, 4);
    fs::write( dir.join("corrupt.png"), b"not a png").unwrap();
    fs::write( dir.join("notes.txt"), b"not an image").unwrap();
    save_rgba( dir, "UPPER.PNG", 2, 2);

    let sampled = sample_images( dir, &["png"]).unwrap();
    let names: Vec<&str> = sampled.files.iter().filter_map( |f| f.file_name()?.to_str()).collect();
    assert_eq!( names, vec!["UPPER.PNG", "good.png"]);
    assert_eq!( sampled.max_tile_size, Dim::new(4,4));
}

#[test]
fn test_sample_empty_dir() {
    let tmp = tempfile::tempdir().unwrap();
    fs::write( tmp.path().join("corrupt.gif"), b"GIF?").unwrap();

    let sampled = sample_images( tmp.path(), &["png", "gif"]).unwrap();
    assert!( sampled.is_empty());
    assert_eq!( sampled.max_tile_size, Dim::new(0,0));
}

#[test]
fn test_sample_missing_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let res = sample_images( tmp.path().join("nope"), &["png"]);
    assert!( matches!( res, Err(TilesheetError::InvalidDirectory(_))));
}

#[test]
fn test_sample_detects_format_from_content() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path();
    // PNG data in a file with a jpg extension
    RgbaImage::from_pixel( 6, 5, Rgba([0,255,0,255])).save_with_format( dir.join("tile.jpg"), ImageFormat::Png).unwrap();
    save_rgba( dir, "other.png", 2, 2);

    let sampled = sample_images( dir, TilesheetConfig::default().image_extensions.as_slice()).unwrap();
    let names: Vec<&str> = sampled.files.iter().filter_map( |f| f.file_name()?.to_str()).collect();
    assert_eq!( names, vec!["other.png", "tile.jpg"]);
    assert_eq!( sampled.max_tile_size, Dim::new(6,5));
}
