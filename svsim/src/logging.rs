//! Tracing subscriber setup
//!
//! The library crates only emit `tracing` events: `trace` per gate, `debug`
//! for measurement outcomes, noise events and Grover iteration plans. Call
//! [`init_tracing`] once from a binary or test to see them.

use std::env;
use thiserror::Error;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt as tracing_fmt, EnvFilter, Registry};

/// Environment variable overriding the filter directives
pub const DIRECTIVES_ENV: &str = "SVSIM_LOG";

/// Environment variable selecting the output format (`pretty` or `compact`)
pub const FORMAT_ENV: &str = "SVSIM_LOG_FORMAT";

/// Output format for the formatter layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Pretty,
    Compact,
}

impl LogOutput {
    fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            _ => None,
        }
    }
}

/// How the subscriber filters and formats events
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directives such as `svsim_state=trace`. When absent `RUST_LOG`
    /// is used, then `default_directive`.
    pub directives: Option<String>,
    pub default_directive: String,
    /// Show event targets (module paths)
    pub include_targets: bool,
    pub ansi: bool,
    pub output: LogOutput,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directives: None,
            default_directive: "info".to_string(),
            include_targets: true,
            ansi: true,
            output: LogOutput::Compact,
        }
    }
}

impl LoggingConfig {
    /// Gate-level tracing for every svsim crate
    pub fn verbose() -> Self {
        Self {
            directives: Some(
                "svsim=trace,svsim_state=trace,svsim_noise=debug,svsim_algorithms=debug".to_string(),
            ),
            output: LogOutput::Pretty,
            ..Default::default()
        }
    }

    /// Defaults overridden by `SVSIM_LOG` and `SVSIM_LOG_FORMAT`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(directives) = env::var(DIRECTIVES_ENV) {
            if !directives.trim().is_empty() {
                config.directives = Some(directives);
            }
        }

        if let Some(output) = env::var(FORMAT_ENV).ok().as_deref().and_then(LogOutput::from_env_value) {
            config.output = output;
        }

        config
    }

    fn resolve_filter(&self) -> Result<EnvFilter, LoggingError> {
        match &self.directives {
            Some(directives) => {
                EnvFilter::try_new(directives).map_err(|err| LoggingError::InvalidFilter(err.to_string()))
            }
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(self.default_directive.clone()))),
        }
    }
}

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid tracing directive: {0}")]
    InvalidFilter(String),

    /// Usually because a global subscriber is already set
    #[error("failed to install global tracing subscriber: {0}")]
    SubscriberInit(#[from] tracing_subscriber::util::TryInitError),
}

/// Build a subscriber writing to stdout, without installing it
pub fn build_subscriber(config: &LoggingConfig) -> Result<impl Subscriber + Send + Sync, LoggingError> {
    build_subscriber_with_writer(config, std::io::stdout)
}

/// Build a subscriber that formats events into `writer`
pub fn build_subscriber_with_writer<W>(
    config: &LoggingConfig,
    writer: W,
) -> Result<impl Subscriber + Send + Sync, LoggingError>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = config.resolve_filter()?;

    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.output {
        LogOutput::Compact => Box::new(
            tracing_fmt::layer()
                .compact()
                .with_target(config.include_targets)
                .with_ansi(config.ansi)
                .with_writer(writer),
        ),
        LogOutput::Pretty => Box::new(
            tracing_fmt::layer()
                .pretty()
                .with_target(config.include_targets)
                .with_ansi(config.ansi)
                .with_writer(writer),
        ),
    };

    Ok(Registry::default().with(layer).with(filter))
}

/// Install the configured subscriber as the process-wide default
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    build_subscriber(config)?.try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_output_from_env_value() {
        assert_eq!(LogOutput::from_env_value("Pretty"), Some(LogOutput::Pretty));
        assert_eq!(LogOutput::from_env_value(" compact "), Some(LogOutput::Compact));
        assert_eq!(LogOutput::from_env_value("json"), None);
    }

    #[test]
    fn test_invalid_directive_rejected() {
        let config = LoggingConfig {
            directives: Some("svsim_state=notalevel".to_string()),
            ..Default::default()
        };
        assert!(matches!(build_subscriber(&config), Err(LoggingError::InvalidFilter(_))));
    }

    #[test]
    fn test_build_verbose_subscriber() {
        assert!(build_subscriber(&LoggingConfig::verbose()).is_ok());
    }

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn plain(mut config: LoggingConfig) -> LoggingConfig {
        config.ansi = false;
        config.output = LogOutput::Compact;
        config
    }

    #[test]
    fn test_scoped_subscriber_sees_library_events() {
        let writer = CaptureWriter::default();
        let subscriber = build_subscriber_with_writer(&plain(LoggingConfig::verbose()), writer.clone()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let mut reg = svsim_state::Register::zero_state(1).unwrap();
            reg.apply_gate(0, &svsim_gates::matrices::HADAMARD).unwrap();
        });

        let output = writer.contents();
        assert!(output.contains("apply single-qubit gate"), "captured: {}", output);
        assert!(output.contains("svsim_state"), "captured: {}", output);
    }

    #[test]
    fn test_filter_drops_gate_events_below_level() {
        let writer = CaptureWriter::default();
        let config = plain(LoggingConfig {
            directives: Some("svsim_state=debug".to_string()),
            ..Default::default()
        });
        let subscriber = build_subscriber_with_writer(&config, writer.clone()).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            let mut reg = svsim_state::Register::zero_state(1).unwrap();
            reg.apply_gate(0, &svsim_gates::matrices::HADAMARD).unwrap();
        });

        assert!(!writer.contents().contains("apply single-qubit gate"));
    }
}
