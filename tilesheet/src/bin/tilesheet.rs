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

use anyhow::Result;
use clap::CommandFactory;
use lazy_static::lazy_static;
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;
use tilesheet::{TilesheetArgs, TilesheetConfig, completion_message};

lazy_static! {
    // unknown or malformed arguments are dropped, only help requests end up as errors
    static ref ARGS: TilesheetArgs = TilesheetArgs::parse_forgiving( std::env::args_os()).unwrap_or_else( |e| e.exit());
}

fn main()->Result<()> {
    init_tracing();
    lazy_static::initialize( &ARGS);

    let config = TilesheetConfig::maybe_open( ARGS.config.as_ref())?;

    if ARGS.test {
        println!("{}", ARGS.test_report( &config));
        return Ok(())
    }

    let Some(mode) = ARGS.mode else {
        warn!("invalid operating mode");
        TilesheetArgs::command().print_help()?;
        return Ok(())
    };
    info!("operating mode: {mode}");

    let result = ARGS.run( mode, &config);
    println!("{}", completion_message( mode, &result));
    if result.is_err() {
        std::process::exit(1)
    }
    Ok(())
}

fn init_tracing() {
    // RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter( filter).try_init();
}
