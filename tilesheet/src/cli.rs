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

use std::{ffi::OsString, fmt, path::{Path,PathBuf}};
use clap::{Parser, ValueEnum, error::ErrorKind};
use tracing::{info,warn};
use crate::config::TilesheetConfig;
use crate::errors::Result;
use crate::geometry::Dim;
use crate::join::join_tiles;
use crate::scale::{ScaleDirection,scale_file};
use crate::split::{SplitParams,split_tilesheet};

#[derive(Debug,Clone,Copy,PartialEq,Eq,ValueEnum)]
pub enum Mode {
    #[value(alias="disassemble")]
    Split,
    #[value(aliases=["grow","enlarge"])]
    Enbiggen,
    #[value(aliases=["shrink","reduce"])]
    Ensmallen,
    #[value(alias="combine")]
    Join,
}

impl fmt::Display for Mode {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        match self {
            Mode::Split => write!(f, "Split"),
            Mode::Enbiggen => write!(f, "Enbiggen"),
            Mode::Ensmallen => write!(f, "Ensmallen"),
            Mode::Join => write!(f, "Join"),
        }
    }
}

/// command line options of the `tilesheet` tool. Use [`TilesheetArgs::parse_forgiving`] to parse
/// real command lines, which drops unknown or malformed options instead of rejecting them
#[derive(Parser,Debug,Clone,PartialEq)]
#[command(name="tilesheet", about="split tilesheets into named tiles, join tiles into tilesheets and scale pixel art", args_override_self=true)]
pub struct TilesheetArgs {
    #[arg(help="operating mode", long, value_enum, ignore_case=true, aliases=["operating-mode","operating_mode"])]
    pub mode: Option<Mode>,

    //--- files and directories
    #[arg(help="source image file (split, enbiggen, ensmallen)", long, aliases=["source_file","source"])]
    pub source_file: Option<PathBuf>,

    #[arg(help="target image file (join, enbiggen, ensmallen)", long, aliases=["target_file","target"])]
    pub target_file: Option<PathBuf>,

    #[arg(help="directory with tile images (join)", long, alias="source_directory")]
    pub source_directory: Option<PathBuf>,

    #[arg(help="directory to store tiles in (split)", long, alias="target_directory")]
    pub target_directory: Option<PathBuf>,

    #[arg(help="JSON tile name map (split)", long, aliases=["names_file","name-file","name_file"])]
    pub names_file: Option<PathBuf>,

    //--- geometry
    #[arg(help="tile size in pixels as WxH (split)", long, alias="tile_size", default_value="0x0")]
    pub tile_size: Dim,

    #[arg(help="tile map size as <columns>x<rows>, 0 is unspecified (join)", long, alias="tile_map_size", default_value="0x0")]
    pub tile_map_size: Dim,

    #[arg(help="pixel offset of the first tile as XxY (split)", long, default_value="0x0")]
    pub offset: Dim,

    #[arg(help="first row that uses names of row - alt_row_start (split)", long, alias="alt_row_start", default_value="0")]
    pub alt_row_start: u32,

    #[arg(help="also save fully transparent tiles (split)", long, alias="save_empty_tiles")]
    pub save_empty_tiles: bool,

    #[arg(help="integer scale factor (enbiggen, ensmallen)", long, default_value="0")]
    pub scale: u32,

    #[arg(help="optional RON config file", long)]
    pub config: Option<PathBuf>,

    #[arg(help="only print arguments and checks, do not execute", long)]
    pub test: bool,
}

impl TilesheetArgs {
    /// parse a command line (including the program name) without rejecting it. Each option (with its value if
    /// it has one) is checked on its own, options that are unknown or have malformed values are dropped with a
    /// warning. The only errors are help and version requests
    pub fn parse_forgiving<I,T> (args: I)->std::result::Result<Self,clap::Error>
        where I: IntoIterator<Item=T>, T: Into<OsString>
    {
        let mut args = args.into_iter().map( Into::into);
        let bin: OsString = args.next().unwrap_or_else( || OsString::from("tilesheet"));
        let rest: Vec<OsString> = args.collect();

        let mut kept: Vec<OsString> = vec![ bin.clone() ];
        let mut i = 0;
        while i < rest.len() {
            let opt = &rest[i];

            if let Some(val) = rest.get(i+1).filter( |v| !is_option(v)) {
                if Self::accepts( &bin, &[opt, val]) {
                    kept.push( opt.clone());
                    kept.push( val.clone());
                    i += 2;
                    continue;
                }
            }

            if Self::accepts( &bin, &[opt]) {
                kept.push( opt.clone());
            } else {
                warn!("ignoring command line argument {opt:?}");
            }
            i += 1;
        }

        Self::try_parse_from( kept)
    }

    fn accepts (bin: &OsString, args: &[&OsString])->bool {
        let argv = std::iter::once( bin).chain( args.iter().copied());
        match Self::try_parse_from( argv) {
            Ok(_) => true,
            Err(e) => matches!( e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        }
    }

    /// execute `mode` with these options
    pub fn run (&self, mode: Mode, config: &TilesheetConfig)->Result<()> {
        match mode {
            Mode::Split => {
                info!("names file: {:?}", self.names_file);
                info!("source file: {:?}", self.source_file);
                info!("target directory: {:?}", self.target_directory);

                let params = SplitParams::new( self.tile_size)
                    .with_offset( self.offset)
                    .with_alt_row_start( self.alt_row_start)
                    .with_save_empty_tiles( self.save_empty_tiles);

                let tiles = split_tilesheet( path_arg(&self.source_file), path_arg(&self.target_directory), path_arg(&self.names_file), &params)?;
                info!("saved {} tiles", tiles.len());
            }
            Mode::Enbiggen => {
                let target = scale_file( path_arg(&self.source_file), self.target_file.as_deref(), self.scale, ScaleDirection::Enbiggen, config)?;
                info!("saved {target:?}");
            }
            Mode::Ensmallen => {
                let target = scale_file( path_arg(&self.source_file), self.target_file.as_deref(), self.scale, ScaleDirection::Ensmallen, config)?;
                info!("saved {target:?}");
            }
            Mode::Join => {
                let Dim{ w: cols, h: rows } = self.tile_map_size;
                join_tiles( path_arg(&self.source_directory), path_arg(&self.target_file), rows as i64, cols as i64, config)?;
            }
        }
        Ok(())
    }

    /// the report of the `--test` option: parsed arguments and which of them are usable
    pub fn test_report (&self, config: &TilesheetConfig)->String {
        let is_file = |p: &Option<PathBuf>| exists( p.as_ref().is_some_and( |p| p.is_file()));
        let is_dir = |p: &Option<PathBuf>| exists( p.as_ref().is_some_and( |p| p.is_dir()));

        [
            "Test mode, printing arguments.".to_string(),
            format!("{self:#?}"),
            format!("{config:#?}"),
            format!("Names File:  {}", is_file( &self.names_file)),
            format!("Source File: {}", is_file( &self.source_file)),
            format!("Target File: {}", is_file( &self.target_file)),
            format!("Source Directory: {}", is_dir( &self.source_directory)),
            format!("Target Directory: {}", is_dir( &self.target_directory)),
            format!("Tile Size: {}", valid( !self.tile_size.is_empty())),
            "Offset: Offset can only be compared against a source or target file.".to_string(),
            format!("Scale: {}", valid( config.is_valid_scale( self.scale))),
        ].join("\n")
    }
}

/// the message printed after executing `mode`
pub fn completion_message<T> (mode: Mode, result: &Result<T>)->String {
    match result {
        Ok(_) => format!("{mode} completed successfully."),
        Err(e) => format!("{mode} completed unsuccessfully, message was: '{e}'")
    }
}

fn is_option (arg: &OsString)->bool {
    arg.to_string_lossy().starts_with('-')
}

fn path_arg (opt_path: &Option<PathBuf>)->&Path {
    opt_path.as_deref().unwrap_or( Path::new(""))
}

fn exists (is_there: bool)->&'static str {
    if is_there { "Exists" } else { "Does Not Exist" }
}

fn valid (is_valid: bool)->&'static str {
    if is_valid { "Valid" } else { "Invalid" }
}
