//! Server configuration loaded from an optional TOML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Limits applied to every `/sort` request.
///
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Reject arrays longer than this with 413.
    pub max_array_len: usize,

    /// Reject requests whose worst-case trace would exceed this many steps.
    pub max_steps: usize,

    /// Wall-clock budget for one sort, in milliseconds.
    pub sort_timeout_ms: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_array_len: 1_000,
            max_steps: 2_000_000,
            sort_timeout_ms: 5_000,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_array_len == 0 {
            return Err(anyhow!("max_array_len must be > 0"));
        }
        if self.max_steps == 0 {
            return Err(anyhow!("max_steps must be > 0"));
        }
        if self.sort_timeout_ms == 0 {
            return Err(anyhow!("sort_timeout_ms must be > 0"));
        }
        Ok(())
    }

    pub fn sort_timeout(&self) -> Duration {
        Duration::from_millis(self.sort_timeout_ms)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ServerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ServerConfig> {
    if !path.exists() {
        let cfg = ServerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ServerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, ServerConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("server.toml");
        fs::write(&path, "max_array_len = 64\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.max_array_len, 64);
        assert_eq!(cfg.sort_timeout_ms, ServerConfig::default().sort_timeout_ms);
    }

    #[test]
    fn defaults_admit_worst_case_of_largest_array() {
        let cfg = ServerConfig::default();
        let worst = sorttrace::Algorithm::ALL
            .into_iter()
            .map(|algorithm| algorithm.max_steps(cfg.max_array_len))
            .max()
            .expect("registry is not empty");
        assert!(worst <= cfg.max_steps);
    }

    #[test]
    fn zero_limits_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("server.toml");
        fs::write(&path, "sort_timeout_ms = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("sort_timeout_ms"));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("server.toml");
        fs::write(&path, "max_array_len = \"lots\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{:#}", err).contains("server.toml"));
    }
}
