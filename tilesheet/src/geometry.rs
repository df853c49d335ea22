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

use std::{fmt, str::FromStr};
use crate::errors::{Result,TilesheetError,geometry_error,invalid_argument};

/// a `WxH` (or `XxY`) pair as used for tile sizes, tile map sizes and offsets
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct Dim {
    pub w: u32,
    pub h: u32
}

impl Dim {
    pub fn new (w: u32, h: u32)->Self { Dim{w,h} }

    pub fn is_empty (&self)->bool { self.w == 0 || self.h == 0 }
}

impl fmt::Display for Dim {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

/// lenient parser: we need exactly two 'x' separated parts, but a part that is not a
/// number is taken as 0 (which is rejected later by the operations that cannot use it)
impl FromStr for Dim {
    type Err = TilesheetError;

    fn from_str (s: &str)->Result<Self> {
        let parts: Vec<&str> = s.split(['x','X']).map( |p| p.trim()).filter( |p| !p.is_empty()).collect();
        if parts.len() != 2 {
            return Err( invalid_argument( format!("not a WxH value: '{s}'")))
        }
        let w = parts[0].parse::<u32>().unwrap_or(0);
        let h = parts[1].parse::<u32>().unwrap_or(0);
        Ok( Dim{w,h} )
    }
}

/// number of tile columns and rows of a tile map
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq)]
pub struct TileGridSize {
    pub columns: u32,
    pub rows: u32
}

impl TileGridSize {
    pub fn new (columns: u32, rows: u32)->Self { TileGridSize{columns,rows} }

    pub fn is_empty (&self)->bool { self.columns == 0 || self.rows == 0 }

    pub fn capacity (&self)->u64 { self.columns as u64 * self.rows as u64 }
}

impl fmt::Display for TileGridSize {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} columns x {} rows", self.columns, self.rows)
    }
}

/// number of complete tiles that fit into a sheet of `sheet_size` after skipping the `offset` margin
pub fn split_grid_size (sheet_size: Dim, tile_size: Dim, offset: Dim)->Result<TileGridSize> {
    if tile_size.is_empty() {
        return Err( invalid_argument( format!("tile size {tile_size}")))
    }

    let columns = ((sheet_size.w as f64 - offset.w as f64) / tile_size.w as f64).floor().max(0.0) as u32;
    let rows = ((sheet_size.h as f64 - offset.h as f64) / tile_size.h as f64).floor().max(0.0) as u32;
    let grid = TileGridSize{columns,rows};

    if grid.is_empty() {
        Err( geometry_error( format!("no {tile_size} tiles in {sheet_size} sheet with offset {offset}")))
    } else {
        Ok( grid )
    }
}

/// layout for joining `image_count` images. A zero (or negative) `rows`/`cols` is unspecified.
///  - neither given: squarish grid with `floor(sqrt(n))` rows and one more column if n is not a square.
///    This can be short of capacity (e.g. n=3 gives 2x1), which we keep as is
///  - only cols given: a single column, only rows given: a single row
///  - both given but too small: keep rows and add columns
pub fn join_grid_size (image_count: usize, rows: i64, cols: i64)->Result<TileGridSize> {
    let rows = rows.max(0) as u64;
    let cols = cols.max(0) as u64;
    let n = image_count as u64;

    let (tile_cols, tile_rows) = if rows == 0 && cols == 0 {
        let square_root = (n as f64).sqrt();
        let tile_rows = square_root.floor() as u64;
        let tile_cols = if square_root.fract() > 0.0 { tile_rows + 1 } else { tile_rows };
        (tile_cols, tile_rows)

    } else if rows == 0 {
        (1, n)

    } else if cols == 0 {
        (n, 1)

    } else {
        let capacity = rows.checked_mul(cols).ok_or_else( || geometry_error( format!("{cols}x{rows} grid overflow")))?;
        if capacity < n {
            (n.div_ceil(rows), rows)
        } else {
            (cols, rows)
        }
    };

    let columns = u32::try_from(tile_cols).map_err( |_| geometry_error( format!("too many columns: {tile_cols}")))?;
    let rows = u32::try_from(tile_rows).map_err( |_| geometry_error( format!("too many rows: {tile_rows}")))?;
    Ok( TileGridSize{columns,rows} )
}
