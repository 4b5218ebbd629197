//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use loadout_runtime::RuntimeConfig;

/// Sandbox client configuration.
#[derive(Clone, Debug)]
pub struct CliConfig {
    /// Content directory holding `config.toml` and `items.ron`. `None` selects the
    /// bundled content.
    pub data_dir: Option<PathBuf>,
    /// Simulated frames per second.
    pub tick_hz: u32,
    pub runtime: RuntimeConfig,
}

impl CliConfig {
    pub const DEFAULT_TICK_HZ: u32 = 30;

    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOADOUT_DATA_DIR` - Content directory (default: bundled content)
    /// - `LOADOUT_TICK_HZ` - Frames per second, at least 1 (default: 30)
    /// - `LOADOUT_MONTAGE_SECONDS` - Default montage duration (default: 0.5)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("LOADOUT_DATA_DIR") {
            config.data_dir = Some(dir);
        }
        if let Some(hz) = read_env::<u32>("LOADOUT_TICK_HZ") {
            config.tick_hz = hz.max(1);
        }
        if let Some(seconds) = read_env::<f32>("LOADOUT_MONTAGE_SECONDS") {
            config.runtime.default_montage_seconds = seconds.max(0.0);
        }

        config
    }

    /// Seconds per simulated frame.
    pub fn frame_seconds(&self) -> f32 {
        1.0 / self.tick_hz.max(1) as f32
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            tick_hz: Self::DEFAULT_TICK_HZ,
            runtime: RuntimeConfig::default(),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
