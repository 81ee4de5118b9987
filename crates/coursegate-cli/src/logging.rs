//! Tracing setup for the binary.
//!
//! The libraries only emit events; this is the one place a subscriber is
//! installed. `RUST_LOG` wins when set. Otherwise the level comes from the
//! flags: `--quiet` gives error, no flag gives warn, and each `-v` steps
//! through info, debug and trace.

use std::io::IsTerminal as _;

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the CLI shows.
const TARGETS: &[&str] = &["coursegate", "coursegate_core", "coursegate_adapters"];

/// Install the stderr subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(derive_level(args))));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .context("a tracing subscriber is already installed")
}

fn filter_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn derive_level(args: &GlobalArgs) -> &'static str {
    match (args.quiet, args.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn verbosity_steps_through_levels() {
        let levels: Vec<_> = (0..=4).map(|v| derive_level(&args(v, false))).collect();
        assert_eq!(levels, ["warn", "info", "debug", "trace", "trace"]);
    }

    #[test]
    fn quiet_wins() {
        assert_eq!(derive_level(&args(0, true)), "error");
        assert_eq!(derive_level(&args(3, true)), "error");
    }

    #[test]
    fn directives_cover_every_crate() {
        assert_eq!(
            filter_directives("debug"),
            "coursegate=debug,coursegate_core=debug,coursegate_adapters=debug"
        );
    }
}
