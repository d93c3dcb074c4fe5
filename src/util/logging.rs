//! Opt-in `tracing` subscriber for fstree's own events
//!
//! The library never installs a subscriber. What it emits, all under the `fstree` target:
//!
//! - DEBUG `fstree::tree`: one event per `mkdirp` (`path`, `created`) and per `copy`
//!   (`from`, `to`, `files`)
//! - TRACE `fstree::tree`: every directory `list` descends into and every file `copy` writes
//! - DEBUG `fstree::scaffold`: one event per scaffolded package (`name`, `dir`)
//!
//! ```no_run
//! // FSTREE_LOG_LEVEL=trace FSTREE_LOG_JSON=true
//! fstree::util::init_from_env();
//! ```

use std::env;
use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_LEVEL_ENV: &str = "FSTREE_LOG_LEVEL";
pub const LOG_JSON_ENV: &str = "FSTREE_LOG_JSON";

const DEFAULT_LEVEL: Level = Level::DEBUG;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level shown for `fstree` events
    pub level: Level,
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Reads `FSTREE_LOG_LEVEL` (trace..error, any case) and `FSTREE_LOG_JSON` (true/false).
    /// Unset or unparsable values keep the defaults.
    pub fn from_env() -> Self {
        let level = env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<Level>().ok())
            .unwrap_or(DEFAULT_LEVEL);

        let json = env::var(LOG_JSON_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<bool>().ok())
            .unwrap_or(false);

        Self { level, json }
    }

    /// Filter directive scoping `level` to this crate, e.g. `fstree=debug`.
    pub fn directive(&self) -> String {
        format!("fstree={}", self.level.as_str().to_ascii_lowercase())
    }
}

/// Installs a global subscriber showing fstree events at `config.level`, with any `RUST_LOG`
/// directives applied on top.
///
/// Returns false if a global subscriber was already installed, by this call or anyone else.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = config.directive().parse::<Directive>() {
        filter = filter.add_directive(directive);
    }

    let installed = if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init()
    };

    installed.is_ok()
}

pub fn init_from_env() -> bool {
    init_logging(&LoggingConfig::from_env())
}
