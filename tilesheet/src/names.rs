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
use crate::errors::{Result,TilesheetError};

/// explicit binding of a tile grid coordinate to a name
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub x: u32, // column
    pub y: u32, // row
}

impl NameEntry {
    pub fn new (name: impl ToString, x: u32, y: u32)->Self {
        NameEntry { name: name.to_string(), x, y }
    }
}

/// the name map of a tilesheet as read from a JSON file like
/// ```json
/// { "names_list": ["idle", "walk"],
///   "names_map": [ {"name": "door", "x": 2, "y": 3} ] }
/// ```
/// If `names_map` has entries it takes precedence, otherwise names are consumed from
/// `names_list` in the order tiles are visited.
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct NamesMap {
    #[serde(default, deserialize_with="null_as_empty")]
    pub names_list: Vec<String>,

    #[serde(default, deserialize_with="null_as_empty")]
    pub names_map: Vec<NameEntry>,
}

fn null_as_empty<'de,D,T> (deserializer: D)->std::result::Result<Vec<T>,D::Error>
    where D: serde::Deserializer<'de>, T: Deserialize<'de>
{
    let opt: Option<Vec<T>> = Option::deserialize( deserializer)?;
    Ok( opt.unwrap_or_default() )
}

impl NamesMap {
    pub fn from_list<S: ToString> (names: &[S])->Self {
        NamesMap { names_list: names.iter().map( |s| s.to_string()).collect(), names_map: Vec::new() }
    }

    pub fn from_entries (entries: Vec<NameEntry>)->Self {
        NamesMap { names_list: Vec::new(), names_map: entries }
    }

    /// read a JSON name map file. Both a missing and an unparsable file are reported as `InvalidNameMap`
    pub fn open<P> (path: P)->Result<Self> where P: AsRef<Path> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err( TilesheetError::InvalidNameMap( format!("names file {path:?} not found")))
        }

        let contents = filepath_contents_as_string( &path)
            .map_err( |e| TilesheetError::InvalidNameMap( format!("cannot read {path:?}: {e}")))?;
        serde_json::from_str( contents.as_str())
            .map_err( |e| TilesheetError::InvalidNameMap( format!("cannot parse {path:?}: {e}")))
    }

    pub fn is_empty (&self)->bool {
        self.names_map.is_empty() && self.names_list.is_empty()
    }

    /// get the name of the tile at `row`/`col`, which is the `index`th tile visited.
    /// Coordinate entries are searched first-match-wins. Having no name is not an error
    pub fn resolve_name (&self, row: u32, col: u32, index: usize)->Option<&str> {
        if !self.names_map.is_empty() {
            self.names_map.iter()
                .find( |e| e.x == col && e.y == row)
                .map( |e| e.name.as_str())
        } else {
            self.names_list.get( index).map( |s| s.as_str())
        }
    }
}
