//! Log subscriber setup.
//!
//! The subscriber is installed before the config file is read, so the
//! loader's own messages are not lost. The `[logging] level` setting is
//! applied afterwards through a reload handle, unless `RUST_LOG` or
//! `--log-level` already chose the filter.

use parley_config::LogLevel;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Filter used until the config file has been read.
const DEFAULT_DIRECTIVE: &str = "parley=info";

/// Handle for replacing the filter once the config is known.
pub struct LogLevelHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    /// Set when the filter came from `RUST_LOG` or the command line.
    pinned: bool,
}

impl LogLevelHandle {
    /// Switch to the configured level. No-op when the filter is pinned.
    pub fn apply_config(&self, level: LogLevel) {
        if self.pinned {
            return;
        }
        if let Err(e) = self.handle.reload(EnvFilter::new(level.directive())) {
            tracing::warn!(error = %e, "failed to apply configured log level");
        }
    }
}

/// Build the subscriber. `RUST_LOG` wins, then the CLI directive; either
/// one pins the filter. Directives that fail to parse are skipped.
pub fn subscriber<W>(
    env_directive: Option<String>,
    cli_directive: Option<&str>,
    writer: W,
) -> (impl Subscriber + Send + Sync + 'static, LogLevelHandle)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let pinned = env_directive
        .as_deref()
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| cli_directive.and_then(|d| EnvFilter::try_new(d).ok()));

    let (filter, pinned) = match pinned {
        Some(filter) => (filter, true),
        None => (EnvFilter::new(DEFAULT_DIRECTIVE), false),
    };

    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));

    (subscriber, LogLevelHandle { handle, pinned })
}
