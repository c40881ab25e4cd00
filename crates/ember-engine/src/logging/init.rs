use std::sync::Once;

/// Where log records are written.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LogTarget {
    /// Shader and surface diagnostics go to standard output by default.
    #[default]
    Stdout,
    Stderr,
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "ember_engine=debug").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            target: LogTarget::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Later calls are ignored. Call it early in `main`, before the window is created,
/// so shader and context diagnostics are not lost.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        // A host application may already own the global logger.
        if builder(&config).try_init().is_ok() {
            log::debug!("logging initialized ({:?})", config.target);
        }
    });
}

/// Filter precedence: explicit `env_filter`, then `RUST_LOG`, then `info`.
fn builder(config: &LoggingConfig) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();

    match config.env_filter.clone().or_else(|| std::env::var("RUST_LOG").ok()) {
        Some(filter) => builder.parse_filters(&filter),
        None => builder.filter_level(log::LevelFilter::Info),
    };

    builder.write_style(config.write_style);
    builder.target(match config.target {
        LogTarget::Stdout => env_logger::Target::Stdout,
        LogTarget::Stderr => env_logger::Target::Stderr,
    });
    builder
}
