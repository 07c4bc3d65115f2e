use std::path::PathBuf;

const DEFAULT_SETTINGS_PATH: &str = "dhcp_settings.csv";
const DEFAULT_SYSLOG_PATH: &str = "dhcp_syslog.csv";
const DEFAULT_TOP_N: usize = 25;

/// Resolved input paths and report sizing for one run.
///
/// Precedence, lowest to highest: built-in defaults, then the
/// `LEASECHECK_SETTINGS` / `LEASECHECK_SYSLOG` environment variables,
/// then CLI flags (applied by the caller after `load`).
#[derive(Debug, Clone)]
pub struct Config {
    pub settings_path: PathBuf,
    pub syslog_path: PathBuf,
    pub top_clients: usize,
    pub top_networks: usize,
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("LEASECHECK_SETTINGS") {
            config.settings_path = PathBuf::from(val);
        }
        if let Ok(val) = std::env::var("LEASECHECK_SYSLOG") {
            config.syslog_path = PathBuf::from(val);
        }

        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            syslog_path: PathBuf::from(DEFAULT_SYSLOG_PATH),
            top_clients: DEFAULT_TOP_N,
            top_networks: DEFAULT_TOP_N,
        }
    }
}
