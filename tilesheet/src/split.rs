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
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage};
use tracing::info;
use tilesheet_common::fs::{ensure_writable_dir, filestem, remove_existing_file};
use crate::errors::{Result,TilesheetError,file_not_found,invalid_directory};
use crate::geometry::{Dim,TileGridSize,split_grid_size};
use crate::image_file::open_image;
use crate::names::NamesMap;

/// parameters of a split operation
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct SplitParams {
    pub tile_size: Dim,

    /// top left pixel margin of the sheet that does not contain tiles
    pub offset: Dim,

    /// rows at and below this index are mapped to `row - alt_row_start` for name lookup (0: disabled)
    pub alt_row_start: u32,

    pub save_empty_tiles: bool
}

impl SplitParams {
    pub fn new (tile_size: Dim)->Self {
        SplitParams { tile_size, offset: Dim::default(), alt_row_start: 0, save_empty_tiles: false }
    }

    pub fn with_offset (mut self, offset: Dim)->Self { self.offset = offset; self }
    pub fn with_alt_row_start (mut self, alt_row_start: u32)->Self { self.alt_row_start = alt_row_start; self }
    pub fn with_save_empty_tiles (mut self, save_empty_tiles: bool)->Self { self.save_empty_tiles = save_empty_tiles; self }

    /// the row we use to look up names for tiles in `row`
    pub fn name_row (&self, row: u32)->u32 {
        if self.alt_row_start > 0 && row >= self.alt_row_start { row - self.alt_row_start } else { row }
    }
}

/// a tile file written by a split
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct SplitTile {
    pub column: u32,
    pub row: u32,
    pub name: String,
    pub path: PathBuf
}

/// default tile name `<base>_<col>_<row>`. Names only sort correctly below 10000 columns/rows
pub fn tile_name (base_name: &str, col: u32, row: u32)->String {
    format!("{base_name}_{col:04}_{row:04}")
}

/// answer if all pixels of `tile` have zero alpha
pub fn is_transparent (tile: &RgbaImage)->bool {
    tile.pixels().all( |p| p.0[3] == 0)
}

/// split `source_file` into PNG tiles stored in `target_dir`, naming them according to the JSON name map in `names_file`
pub fn split_tilesheet<P,Q,R> (source_file: P, target_dir: Q, names_file: R, params: &SplitParams)->Result<Vec<SplitTile>>
    where P: AsRef<Path>, Q: AsRef<Path>, R: AsRef<Path>
{
    let source_file = source_file.as_ref();
    let target_dir = target_dir.as_ref();

    if !source_file.is_file() {
        return Err( file_not_found( format!("{source_file:?}")))
    }
    let base_name = filestem( &source_file).ok_or_else( || file_not_found( format!("no file name in {source_file:?}")))?;

    if target_dir.as_os_str().is_empty() {
        return Err( invalid_directory("no target directory"))
    }
    ensure_writable_dir( target_dir).map_err( |e| invalid_directory( format!("{target_dir:?}: {e}")))?;

    let names = NamesMap::open( names_file)?;

    let img = open_image( source_file)?;

    split_image( &img, base_name, target_dir, &names, params)
}

/// split an already decoded sheet into tiles. Tiles are visited column by column, and within each
/// column row by row. The visit index is what we use to look up names from a `names_list`
pub fn split_image (img: &DynamicImage, base_name: &str, target_dir: &Path, names: &NamesMap, params: &SplitParams)->Result<Vec<SplitTile>> {
    let (width, height) = img.dimensions();
    info!("source bitmap width:  {width}");
    info!("source bitmap height: {height}");

    if width == 0 || height == 0 {
        return Err( TilesheetError::FileInvalid( format!("invalid bitmap size {width}x{height}")))
    }

    let grid: TileGridSize = split_grid_size( Dim::new(width,height), params.tile_size, params.offset)?;
    info!("tilemap columns: {}", grid.columns);
    info!("tilemap rows:    {}", grid.rows);

    let Dim{ w: tile_width, h: tile_height } = params.tile_size;
    let mut tiles: Vec<SplitTile> = Vec::new();
    let mut index: usize = 0;

    for col in 0..grid.columns {
        for row in 0..grid.rows {
            let mut name = tile_name( base_name, col, row);
            if let Some(suffix) = names.resolve_name( params.name_row(row), col, index) {
                if !suffix.is_empty() {
                    name.push('_');
                    name.push_str( suffix);
                }
            }
            index += 1;

            let path = target_dir.join( format!("{name}.png"));
            remove_existing_file( &path)?;

            let x = col * tile_width + params.offset.w;
            let y = row * tile_height + params.offset.h;
            // keeps the color type of the sheet
            let tile: DynamicImage = img.crop_imm( x, y, tile_width, tile_height);

            if !params.save_empty_tiles && is_transparent( &tile.to_rgba8()) {
                info!("{name} is an empty tile, ignored");
                continue;
            }

            info!("saving {name}");
            tile.save_with_format( &path, ImageFormat::Png)?;
            tiles.push( SplitTile{ column: col, row, name, path });
        }
    }

    Ok( tiles )
}
