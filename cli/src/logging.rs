//! Logging setup for the binary.
//!
//! Logs go to stderr so stdout carries only the rendered response. `RUST_LOG`
//! takes precedence over the `-v` count.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a given `-v` count.
pub fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,reqtext={level},reqtext_core={level}")
}

pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbose).into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_directive(0), "warn,reqtext=warn,reqtext_core=warn");
        assert_eq!(default_directive(2), "warn,reqtext=debug,reqtext_core=debug");
        assert_eq!(default_directive(9), "warn,reqtext=trace,reqtext_core=trace");
    }
}
