//! Runtime configuration: environment first, command-line flags on top.
//!
//! Only runtime knobs live here. Game rules are constants in `types`.

use anyhow::{anyhow, Result};

use crate::types::TICK_MS;

pub const USAGE: &str = "\
usage: tui-pong [--tick-ms N] [--log PATH] [--no-mouse]

  --tick-ms N   milliseconds per game tick (default 16)
  --log PATH    append JSON-lines game events to PATH
  --no-mouse    do not capture the mouse (keyboard only)

environment: PONG_TICK_MS, PONG_LOG_PATH, PONG_MOUSE=0
keys: W/S left paddle, Up/Down right paddle, R restart, Q quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub tick_ms: u32,
    pub log_path: Option<String>,
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            log_path: None,
            mouse: true,
        }
    }
}

impl AppConfig {
    /// Create from `PONG_*` environment variables. Unparseable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let tick_ms = lookup("PONG_TICK_MS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(TICK_MS);

        let log_path = lookup("PONG_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let mouse = lookup("PONG_MOUSE")
            .map(|v| !(v == "0" || v.eq_ignore_ascii_case("false")))
            .unwrap_or(true);

        Self {
            tick_ms,
            log_path,
            mouse,
        }
    }

    /// Apply command-line flags. Returns `Ok(None)` when help was requested.
    pub fn apply_args(mut self, args: &[String]) -> Result<Option<Self>> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--tick-ms" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --tick-ms"))?;
                    let ms = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --tick-ms value: {}", v))?;
                    if ms == 0 {
                        return Err(anyhow!("--tick-ms must be at least 1"));
                    }
                    self.tick_ms = ms;
                }
                "--log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --log"))?;
                    self.log_path = Some(v.clone());
                }
                "--no-mouse" => self.mouse = false,
                "-h" | "--help" => return Ok(None),
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(Some(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn env(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = env(&[]);
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.tick_ms, 16);
        assert!(cfg.mouse);
    }

    #[test]
    fn test_env_values() {
        let cfg = env(&[
            ("PONG_TICK_MS", "20"),
            ("PONG_LOG_PATH", " /tmp/pong.jsonl "),
            ("PONG_MOUSE", "false"),
        ]);
        assert_eq!(cfg.tick_ms, 20);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/pong.jsonl"));
        assert!(!cfg.mouse);
    }

    #[test]
    fn test_env_invalid_falls_back() {
        let cfg = env(&[("PONG_TICK_MS", "fast"), ("PONG_LOG_PATH", "  ")]);
        assert_eq!(cfg.tick_ms, 16);
        assert_eq!(cfg.log_path, None);

        assert_eq!(env(&[("PONG_TICK_MS", "0")]).tick_ms, 16);
    }

    #[test]
    fn test_args_override_env() {
        let base = env(&[("PONG_TICK_MS", "20")]);
        let cfg = base
            .apply_args(&args(&["--tick-ms", "10", "--log", "x.jsonl", "--no-mouse"]))
            .unwrap()
            .unwrap();
        assert_eq!(cfg.tick_ms, 10);
        assert_eq!(cfg.log_path.as_deref(), Some("x.jsonl"));
        assert!(!cfg.mouse);
    }

    #[test]
    fn test_args_help() {
        assert_eq!(AppConfig::default().apply_args(&args(&["--help"])).unwrap(), None);
    }

    #[test]
    fn test_args_errors() {
        let base = AppConfig::default;
        assert!(base().apply_args(&args(&["--tick-ms"])).is_err());
        assert!(base().apply_args(&args(&["--tick-ms", "abc"])).is_err());
        assert!(base().apply_args(&args(&["--tick-ms", "0"])).is_err());
        assert!(base().apply_args(&args(&["--log"])).is_err());

        let err = base().apply_args(&args(&["--turbo"])).unwrap_err();
        assert!(err.to_string().contains("--turbo"));
    }
}
