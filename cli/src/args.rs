use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Send the HTTP request described in a text document and print the response
/// in the same format.
#[derive(Parser, Debug)]
#[command(name = "reqtext")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Request document to read (standard input when omitted)
    #[arg()]
    pub file: Option<PathBuf>,

    /// Leave {{NAME}} placeholders untouched instead of filling them from the environment
    #[arg(long)]
    pub no_env: bool,

    /// Log more to stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
