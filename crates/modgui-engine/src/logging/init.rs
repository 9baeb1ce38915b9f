use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` names one.
const DEFAULT_FILTER: &str = "info";

/// How a modgui binary wants its log output.
///
/// `env_filter` takes `env_logger` directives, e.g.
/// `"modgui_ui=trace"` to follow every captured input through the tree.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

impl LoggingConfig {
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Directives that win: the configured filter, then `env`, then `info`.
    fn resolve_filter(&self, env: Option<String>) -> String {
        self.env_filter.clone().or(env).unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Installs the `env_logger` backend behind the `log` facade.
///
/// Only the first call in a process does anything. If the embedding engine
/// already installed a logger, that one is kept.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(std::env::var("RUST_LOG").ok());
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        if builder.try_init().is_err() {
            log::debug!("global logger already set; keeping it");
            return;
        }
        log::debug!("logging initialized with {filter:?}");
    });
}
