use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

#[derive(Parser, Debug)]
#[command(
    name = "jamilek-cli",
    about = "Decode a jamilek document and print it as JSON",
    version
)]
struct Args {
    /// Pretty-print JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Maximum container nesting depth (0 = unlimited)
    #[arg(long, default_value_t = jamilek::options::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let options = jamilek::Options {
        max_depth: (args.max_depth > 0).then_some(args.max_depth),
    };

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(
            File::open(path).with_context(|| format!("opening {}", path.display()))?,
        ),
        None => Box::new(stdin().lock()),
    };
    let node = jamilek::parse_reader(reader, &options)?;
    info!("decoded {} root keys", node.as_object().map_or(0, |e| e.len()));

    let value: serde_json::Value = node.into();
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", serde_json::to_string(&value)?);
    }

    Ok(())
}
