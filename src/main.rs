// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mindtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mindtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mindtree CLI entrypoint.
//!
//! Reads mind-map JSON from a file (or stdin), applies `--toggle` steps in order and prints the
//! result as SVG or Unicode text.

use std::error::Error;
use std::io::Read as _;

use mindtree::config::ViewConfig;
use mindtree::format::input_schema;
use mindtree::layout::{LayoutDirection, LayoutOptions};
use mindtree::view::{RenderSurface, SvgSurface, TreeView, UnicodeSurface};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "MINDTREE_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<input.json>] [--format svg|text] [--direction lr|tb] [--config <file>] [--toggle <label>]...\n  {program} --schema\n\nReads stdin when no input file is given.\n--toggle collapses or expands the first node with that label; repeat to apply several in order.\n--schema prints the JSON schema of the nested input form.\n\nSet {LOG_ENV} (e.g. {LOG_ENV}=debug) to control logging on stderr."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    #[default]
    Svg,
    Text,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    format: Option<OutputFormat>,
    direction: Option<LayoutDirection>,
    config: Option<String>,
    toggles: Vec<String>,
    schema: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                if options.format.is_some() {
                    return Err(());
                }
                options.format = Some(match args.next().ok_or(())?.as_str() {
                    "svg" => OutputFormat::Svg,
                    "text" => OutputFormat::Text,
                    _ => return Err(()),
                });
            }
            "--direction" => {
                if options.direction.is_some() {
                    return Err(());
                }
                options.direction = Some(match args.next().ok_or(())?.as_str() {
                    "lr" => LayoutDirection::LeftToRight,
                    "tb" => LayoutDirection::TopToBottom,
                    _ => return Err(()),
                });
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--toggle" => {
                options.toggles.push(args.next().ok_or(())?);
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            _ => {
                if arg.starts_with('-') || options.input.is_some() {
                    return Err(());
                }
                options.input = Some(arg);
            }
        }
    }

    if options.schema
        && (options.input.is_some()
            || options.format.is_some()
            || options.direction.is_some()
            || options.config.is_some()
            || !options.toggles.is_empty())
    {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Builds the view on `surface`, applies the toggles and hands the surface back.
fn run_view<S: RenderSurface>(
    src: &str,
    layout: LayoutOptions,
    surface: S,
    toggles: &[String],
) -> Result<S, Box<dyn Error>> {
    let mut view = TreeView::from_json_str(src, layout, surface)?;
    for label in toggles {
        let Some(id) = view.tree().find_by_label(label) else {
            tracing::warn!(%label, "no node with this label; toggle ignored");
            continue;
        };
        if view.toggle(id)?.is_none() {
            tracing::warn!(%label, "node has no children; toggle ignored");
        }
    }
    Ok(view.into_surface())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mindtree".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&input_schema())?);
            return Ok(());
        }

        let mut config = match &options.config {
            Some(path) => ViewConfig::load(path)?,
            None => ViewConfig::default(),
        };
        if let Some(direction) = options.direction {
            config.layout.direction = direction;
        }

        let src = match &options.input {
            Some(path) => std::fs::read_to_string(path)
                .map_err(|err| format!("cannot read {path}: {err}"))?,
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        match options.format.unwrap_or_default() {
            OutputFormat::Svg => {
                let surface =
                    run_view(&src, config.layout, SvgSurface::new(config.svg), &options.toggles)?;
                print!("{}", surface.document());
            }
            OutputFormat::Text => {
                let surface = run_view(
                    &src,
                    config.layout,
                    UnicodeSurface::new(config.unicode),
                    &options.toggles,
                )?;
                println!("{}", surface.text());
            }
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mindtree: {err}");
        std::process::exit(1);
    }
}
