// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of orbit-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! orbit-route CLI entrypoint.
//!
//! Reads a scene document (file or stdin), routes every connector and prints
//! the result as JSON on stdout. Diagnostics go to stderr.

use std::error::Error;
use std::io::Write;
use std::path::Path;

use orbit_route::{route_document, Router, RouterConfig, SceneDocument};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <file>] [--graph] [-v] [<scene.json>|-]\n\nReads the scene from stdin when no file (or `-`) is given.\n--config loads router settings from a JSON file; ORBIT_ROUTE_* environment variables override it.\n--graph includes the visibility graph (vertices and segments) in the output.\n-v enables debug logging on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<String>,
    scene_path: Option<String>,
    graph: bool,
    verbose: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                if options.config_path.is_some() {
                    return Err(());
                }
                options.config_path = Some(args.next().ok_or(())?);
            }
            "--graph" => {
                if options.graph {
                    return Err(());
                }
                options.graph = true;
            }
            "-v" | "--verbose" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "-" => {
                if options.scene_path.is_some() {
                    return Err(());
                }
                options.scene_path = Some(arg);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.scene_path.is_some() {
                    return Err(());
                }
                options.scene_path = Some(arg);
            }
        }
    }

    Ok(options)
}

fn load_config(path: Option<&str>) -> Result<RouterConfig, orbit_route::ConfigError> {
    let base = match path {
        Some(path) => RouterConfig::from_file(Path::new(path))?,
        None => RouterConfig::default(),
    };
    base.with_env()
}

fn load_scene(path: Option<&str>) -> Result<SceneDocument, Box<dyn Error>> {
    let document = match path {
        None | Some("-") => SceneDocument::from_reader(std::io::stdin().lock())?,
        Some(path) => {
            let file = std::fs::File::open(path)
                .map_err(|err| format!("failed to open scene {path}: {err}"))?;
            SceneDocument::from_reader(std::io::BufReader::new(file))?
        }
    };
    Ok(document)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "orbit-route".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let level = if options.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN };
        tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

        let config = load_config(options.config_path.as_deref())?;
        tracing::debug!(?config, "router configuration");

        let document = load_scene(options.scene_path.as_deref())?;
        let router = Router::new(config);
        let report = route_document(&router, &document, options.graph);

        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
