//! doxa - verify an argument map and render it with computed credences.

use clap::Parser;
use doxa_cli::{Cli, Config, Formatter};
use doxa_engine::Verifier;
use doxa_extractor::{extract, parse_document};
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let raw = read_input(cli.input.as_deref())?;
    let doc = parse_document(&raw)?;
    let map = extract(&doc);

    let verifier = Verifier::new(config.engine.to_engine_config());
    let report = verifier.run(map);

    println!("{}", formatter.format_report(&report)?);

    if !cli.verify_only {
        let output_path = cli
            .output
            .clone()
            .unwrap_or_else(|| default_output(cli.input.as_deref()));
        fs::write(&output_path, doxa_render::render(&report))?;
        println!();
        println!(
            "{}",
            formatter.info(&format!("Rendered to {}", output_path.display()))
        );
    }

    Ok(if report.passed() { 0 } else { 1 })
}

/// Read the input document from a file, or stdin when no path is given.
fn read_input(input: Option<&std::path::Path>) -> anyhow::Result<String> {
    match input {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Default HTML output path: next to the input, "<stem>_verified.html".
fn default_output(input: Option<&std::path::Path>) -> PathBuf {
    match input {
        Some(path) => {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "argmap".to_string());
            path.with_file_name(format!("{}_verified.html", stem))
        }
        None => PathBuf::from("argmap_verified.html"),
    }
}
