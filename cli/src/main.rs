//! reqtext - send an HTTP request written as plain text
//!
//! Usage:
//!   reqtext < request.http          # read the document from stdin
//!   reqtext request.http            # read it from a file
//!   HOST=api.local reqtext req.http # fill {{HOST}} placeholders

use anyhow::{Context, Result};
use clap::Parser;
use reqtext::{logging, stdio, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let input = match args.file.as_deref() {
        Some(path) => stdio::read_input(Some(path))
            .with_context(|| format!("Failed to read request: {}", path.display()))?,
        None => stdio::read_input(None).context("Failed to read request from stdin")?,
    };
    let output = reqtext::execute(&input, !args.no_env)?;
    stdio::write_output(&output).context("Failed to write response")?;
    Ok(())
}
