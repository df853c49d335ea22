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

use tilesheet::{Dim, TileGridSize, TilesheetError, join_grid_size, split_grid_size};

#[test]
fn test_split_grid() {
    let grid = split_grid_size( Dim::new(64,48), Dim::new(16,16), Dim::new(0,0)).unwrap();
    assert_eq!( grid, TileGridSize::new(4,3));

    // partial tiles are dropped
    let grid = split_grid_size( Dim::new(70,40), Dim::new(16,16), Dim::new(0,0)).unwrap();
    assert_eq!( grid, TileGridSize::new(4,2));

    // offset reduces the usable sheet
    let grid = split_grid_size( Dim::new(64,48), Dim::new(16,16), Dim::new(8,1)).unwrap();
    assert_eq!( grid, TileGridSize::new(3,2));
}

#[test]
fn test_split_grid_floor_property() {
    for w in [16u32, 17, 31, 32, 100, 255] {
        for tw in [1u32, 3, 8, 16] {
            for ox in [0u32, 1, 5] {
                if let Ok(grid) = split_grid_size( Dim::new(w,w), Dim::new(tw,tw), Dim::new(ox,ox)) {
                    let expected = ((w as f64 - ox as f64) / tw as f64).floor() as u32;
                    assert_eq!( grid.columns, expected);
                    assert_eq!( grid.rows, expected);
                }
            }
        }
    }
}

#[test]
fn test_split_grid_degenerate() {
    let res = split_grid_size( Dim::new(15,64), Dim::new(16,16), Dim::new(0,0));
    assert!( matches!( res, Err(TilesheetError::GeometryError(_))));

    // offset beyond the sheet
    let res = split_grid_size( Dim::new(64,64), Dim::new(16,16), Dim::new(100,0));
    assert!( matches!( res, Err(TilesheetError::GeometryError(_))));

    let res = split_grid_size( Dim::new(64,64), Dim::new(0,16), Dim::new(0,0));
    assert!( matches!( res, Err(TilesheetError::InvalidArgument(_))));
}

#[test]
fn test_join_grid_squarish() {
    assert_eq!( join_grid_size( 10, 0, 0).unwrap(), TileGridSize{ columns: 4, rows: 3 });
    assert_eq!( join_grid_size( 9, 0, 0).unwrap(), TileGridSize{ columns: 3, rows: 3 });
    assert_eq!( join_grid_size( 16, 0, 0).unwrap(), TileGridSize{ columns: 4, rows: 4 });

    // under capacity, kept as is
    let grid = join_grid_size( 3, 0, 0).unwrap();
    assert_eq!( grid, TileGridSize{ columns: 2, rows: 1 });
    assert!( grid.capacity() < 3);
}

#[test]
fn test_join_grid_single_row_or_column() {
    assert_eq!( join_grid_size( 7, 0, 5).unwrap(), TileGridSize{ columns: 1, rows: 7 });
    assert_eq!( join_grid_size( 7, 2, 0).unwrap(), TileGridSize{ columns: 7, rows: 1 });
}

#[test]
fn test_join_grid_given() {
    // enough capacity
    assert_eq!( join_grid_size( 7, 3, 3).unwrap(), TileGridSize{ columns: 3, rows: 3 });
    assert_eq!( join_grid_size( 6, 2, 3).unwrap(), TileGridSize{ columns: 3, rows: 2 });

    // not enough, add columns
    assert_eq!( join_grid_size( 10, 3, 2).unwrap(), TileGridSize{ columns: 4, rows: 3 });
    assert_eq!( join_grid_size( 9, 3, 2).unwrap(), TileGridSize{ columns: 3, rows: 3 });
}

#[test]
fn test_join_grid_negative() {
    assert_eq!( join_grid_size( 10, -1, -5).unwrap(), join_grid_size( 10, 0, 0).unwrap());
    assert_eq!( join_grid_size( 4, -1, 2).unwrap(), TileGridSize{ columns: 1, rows: 4 });
}

#[test]
fn test_dim_parse() {
    assert_eq!( "16x32".parse::<Dim>().unwrap(), Dim::new(16,32));
    assert_eq!( " 8 x 4 ".parse::<Dim>().unwrap(), Dim::new(8,4));
    assert_eq!( "0x0".parse::<Dim>().unwrap(), Dim::new(0,0));
    assert_eq!( "ax4".parse::<Dim>().unwrap(), Dim::new(0,4)); // lenient

    assert!( "16".parse::<Dim>().is_err());
    assert!( "16x16x16".parse::<Dim>().is_err());

    assert_eq!( Dim::new(16,32).to_string(), "16x32");
}
