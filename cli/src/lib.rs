//! Host side of `reqtext`: the process environment, a `ureq` transport, and
//! the command-line surface around [`reqtext_core`].

pub mod args;
pub mod env;
pub mod logging;
pub mod stdio;
pub mod transport;

use std::collections::BTreeMap;

use reqtext_core::{Environment, Error};

pub use args::Args;
pub use env::ProcessEnv;
pub use transport::UreqTransport;

/// Run one document through the real environment and network.
///
/// With `use_env` false no placeholders are substituted.
pub fn execute(input: &[u8], use_env: bool) -> Result<Vec<u8>, Error> {
    let empty = BTreeMap::<String, String>::new();
    let env: &dyn Environment = if use_env { &ProcessEnv } else { &empty };
    reqtext_core::run(input, env, &UreqTransport::new())
}
