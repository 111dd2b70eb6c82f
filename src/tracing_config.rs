//! Tracing configuration for debugging edits.
//!
//! Every splice, insertion and removal emits a `debug!` event from
//! `tsedit-statements`; the scanner and parser emit `trace!` events. Output
//! format is controlled by `TSEDIT_LOG_FORMAT`:
//!
//! - `text` (default): flat `tracing-subscriber` lines
//! - `tree`: indented output via `tracing-tree`
//! - `json`: one JSON object per event
//!
//! ```bash
//! TSEDIT_LOG=debug TSEDIT_LOG_FORMAT=tree cargo test -p tsedit-statements
//! TSEDIT_LOG="tsedit_statements=debug,tsedit_parser=trace" cargo bench
//! ```
//!
//! The subscriber is only installed when `TSEDIT_LOG` (or `RUST_LOG`) is set.

use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Tree,
    Json,
}

impl LogFormat {
    /// Unknown values fall back to `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("TSEDIT_LOG_FORMAT").unwrap_or_default())
    }
}

/// `TSEDIT_LOG` takes precedence over `RUST_LOG`.
fn build_filter() -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var("TSEDIT_LOG") {
        return Some(EnvFilter::builder().parse_lossy(directives));
    }
    std::env::var("RUST_LOG")
        .is_ok()
        .then(EnvFilter::from_default_env)
}

/// Install the global subscriber, writing to stderr.
///
/// Returns `false` when logging was not requested or a subscriber is already
/// installed.
pub fn init_tracing() -> bool {
    let Some(filter) = build_filter() else {
        return false;
    };

    let format = LogFormat::from_env();
    let installed = match format {
        LogFormat::Tree => {
            let tree_layer = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            Registry::default().with(filter).with(tree_layer).try_init().is_ok()
        }
        LogFormat::Json => {
            let json_layer = fmt::layer().json().with_writer(std::io::stderr);
            Registry::default().with(filter).with(json_layer).try_init().is_ok()
        }
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .is_ok(),
    };
    if installed {
        debug!(?format, "tracing initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
        assert_eq!(LogFormat::parse("verbose"), LogFormat::Text);
    }

    #[test]
    fn subscriber_is_opt_in() {
        if std::env::var_os("TSEDIT_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
            assert!(!init_tracing());
        } else {
            init_tracing();
            debug!("logged through the installed subscriber");
        }
    }
}
