//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// How the registered catalog is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Configuration for a single catalog run.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub ticks: u64,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            ticks: 1,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `FACTORY_DATA_DIR` - Directory with `config.toml` and `mods/` (default: none)
    /// - `FACTORY_TICKS` - Simulation steps to run after load (default: 1)
    /// - `FACTORY_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: env::var("FACTORY_DATA_DIR").ok().map(PathBuf::from),
            ..Self::default()
        };

        if let Some(ticks) = read_env::<u64>("FACTORY_TICKS") {
            config.ticks = ticks;
        }

        if let Some(output) = read_env::<OutputFormat>("FACTORY_OUTPUT") {
            config.output = output;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
