use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::{
    domain::Operation,
    hooks::HookRegistry,
    observers::{CallStats, install_tracing, uninstall_tracing},
};

const DEFAULT_CONFIG_PATH: &str = "hooks.yml";
const CONFIG_PATH_ENV: &str = "MEMCACHE_HOOKS_CONFIG";
const ENV_PREFIX: &str = "MEMCACHE_HOOKS";

/// Which built-in observers to install on a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Operations logged by the tracing observer.
    pub trace: Vec<Operation>,
    /// Attach call statistics to every operation.
    pub stats: bool,
}

impl Settings {
    /// Parse settings from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self> {
        build(Config::builder().add_source(File::from_str(source, FileFormat::Yaml)))
    }

    /// Install the configured observers, returning the stats handle if enabled.
    ///
    /// Observers installed by an earlier `apply` are removed first, so the
    /// registry reflects only these settings.
    pub fn apply(&self, registry: &HookRegistry) -> Option<Arc<CallStats>> {
        uninstall_tracing(registry);
        CallStats::detach(registry);

        if !self.trace.is_empty() {
            install_tracing(registry, &self.trace);
            tracing::info!(operations = ?self.trace, "installed tracing hooks");
        }

        self.stats.then(|| {
            let stats = Arc::new(CallStats::new());
            stats.attach(registry);
            tracing::info!("installed call statistics hooks");
            stats
        })
    }
}

fn build(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    builder
        .build()
        .map_err(|e| anyhow!("Failed to read hook settings: {e}"))?
        .try_deserialize::<Settings>()
        .context("Failed to deserialize hook settings")
}

/// Load settings from the optional config file, overridden by env.
///
/// `MEMCACHE_HOOKS_CONFIG` points at the file (default `hooks.yml`).
/// `MEMCACHE_HOOKS_TRACE=get,set` and `MEMCACHE_HOOKS_STATS=true` take
/// precedence over the file. Nothing set at all yields the defaults.
pub fn load() -> Result<Settings> {
    let path = match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) => path,
        Err(std::env::VarError::NotPresent) => DEFAULT_CONFIG_PATH.to_string(),
        Err(_) => return Err(anyhow!("Could not read {CONFIG_PATH_ENV} from env")),
    };

    let settings = build(
        Config::builder()
            .add_source(File::with_name(&path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("trace"),
            ),
    )?;

    tracing::debug!(path = %path, ?settings, "loaded hook settings");

    Ok(settings)
}
