//! Runtime configuration from environment variables.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TUI_2048_SEED` | `u32` seed for a reproducible session | random |
//! | `TUI_2048_LOG_PATH` | file that receives log output | logging disabled |
//! | `TUI_2048_SWIPE_THRESHOLD` | minimum mouse drag, in cells | 2 |
//! | `TUI_2048_NO_MOUSE` | `1`/`true` disables mouse capture | enabled |
//!
//! Invalid values fall back to the default. The problems are kept in
//! [`AppConfig::warnings`] so they can be logged once logging is up.

use std::env;

use crate::input::DEFAULT_SWIPE_THRESHOLD;

pub const ENV_SEED: &str = "TUI_2048_SEED";
pub const ENV_LOG_PATH: &str = "TUI_2048_LOG_PATH";
pub const ENV_SWIPE_THRESHOLD: &str = "TUI_2048_SWIPE_THRESHOLD";
pub const ENV_NO_MOUSE: &str = "TUI_2048_NO_MOUSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub log_path: Option<String>,
    pub swipe_threshold: u16,
    pub mouse: bool,
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_path: None,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            mouse: true,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (used by tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(raw) = get(ENV_SEED) {
            match raw.parse() {
                Ok(seed) => cfg.seed = Some(seed),
                Err(_) => cfg
                    .warnings
                    .push(format!("{}={:?} is not a u32 seed, using a random seed", ENV_SEED, raw)),
            }
        }

        cfg.log_path = get(ENV_LOG_PATH);

        if let Some(raw) = get(ENV_SWIPE_THRESHOLD) {
            match raw.parse() {
                Ok(t) => cfg.swipe_threshold = t,
                Err(_) => cfg.warnings.push(format!(
                    "{}={:?} is not a cell count, using {}",
                    ENV_SWIPE_THRESHOLD, raw, DEFAULT_SWIPE_THRESHOLD
                )),
            }
        }

        if let Some(raw) = get(ENV_NO_MOUSE) {
            cfg.mouse = !(raw == "1" || raw.eq_ignore_ascii_case("true"));
        }

        cfg
    }
}
