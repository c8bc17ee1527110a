//! Runtime configuration from `SNAKE_*` environment variables.
//!
//! Unset or malformed values fall back to their defaults.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::warn;

use crate::types::GameConfig;

pub const DEFAULT_HIGHSCORE_PATH: &str = "highscore.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioMode {
    #[default]
    Bell,
    Off,
}

impl AudioMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "bell" | "on" => Some(AudioMode::Bell),
            "off" | "none" => Some(AudioMode::Off),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Fruit RNG seed; `None` lets the binary pick one from the clock.
    pub seed: Option<u32>,
    pub highscore_path: PathBuf,
    pub audio: AudioMode,
    /// Log file for tracing output. Logging is off when unset.
    pub log_path: Option<PathBuf>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            seed: None,
            highscore_path: PathBuf::from(DEFAULT_HIGHSCORE_PATH),
            audio: AudioMode::default(),
            log_path: None,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup, so tests need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();

        let mut game = GameConfig {
            width: parse(&lookup, "SNAKE_WIDTH").unwrap_or(defaults.width),
            height: parse(&lookup, "SNAKE_HEIGHT").unwrap_or(defaults.height),
            cell_size: parse(&lookup, "SNAKE_CELL_SIZE").unwrap_or(defaults.cell_size),
            speed: parse(&lookup, "SNAKE_SPEED")
                .filter(|&speed: &u32| speed > 0)
                .unwrap_or(defaults.speed),
            ..defaults
        };
        if let Err(e) = tui_snake_core::config::validate(&game) {
            warn!(error = %e, "invalid board settings, using defaults");
            game = GameConfig {
                speed: game.speed,
                ..defaults
            };
        }

        let path = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .map(PathBuf::from)
        };

        Self {
            game,
            seed: parse(&lookup, "SNAKE_SEED"),
            highscore_path: path("SNAKE_HIGHSCORE_PATH")
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HIGHSCORE_PATH)),
            audio: lookup("SNAKE_AUDIO")
                .and_then(|s| AudioMode::from_str(&s))
                .unwrap_or_default(),
            log_path: path("SNAKE_LOG_PATH"),
        }
    }
}

fn parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|s| s.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> RuntimeConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let c = config(&[]);
        assert_eq!(c, RuntimeConfig::default());
        assert_eq!(c.game.width, 300);
        assert_eq!(c.highscore_path, PathBuf::from("highscore.json"));
        assert_eq!(c.audio, AudioMode::Bell);
    }

    #[test]
    fn test_overrides() {
        let c = config(&[
            ("SNAKE_WIDTH", "500"),
            ("SNAKE_HEIGHT", "400"),
            ("SNAKE_SPEED", "2"),
            ("SNAKE_SEED", "99"),
            ("SNAKE_AUDIO", "off"),
            ("SNAKE_HIGHSCORE_PATH", "/tmp/hs.json"),
            ("SNAKE_LOG_PATH", " /tmp/snake.log "),
        ]);
        assert_eq!(c.game.width, 500);
        assert_eq!(c.game.height, 400);
        assert_eq!(c.game.tick_rate(), 30);
        assert_eq!(c.seed, Some(99));
        assert_eq!(c.audio, AudioMode::Off);
        assert_eq!(c.highscore_path, PathBuf::from("/tmp/hs.json"));
        assert_eq!(c.log_path, Some(PathBuf::from("/tmp/snake.log")));
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let c = config(&[
            ("SNAKE_WIDTH", "wide"),
            ("SNAKE_SEED", "-3"),
            ("SNAKE_AUDIO", "loud"),
            ("SNAKE_LOG_PATH", "   "),
        ]);
        assert_eq!(c.game.width, 300);
        assert_eq!(c.seed, None);
        assert_eq!(c.audio, AudioMode::Bell);
        assert_eq!(c.log_path, None);
    }

    #[test]
    fn test_invalid_board_falls_back_to_default_board() {
        let c = config(&[("SNAKE_WIDTH", "305"), ("SNAKE_SPEED", "3")]);
        assert_eq!(c.game.width, 300);
        assert_eq!(c.game.speed, 3);

        let c = config(&[("SNAKE_SPEED", "0")]);
        assert_eq!(c.game.speed, 1);
    }

    #[test]
    fn test_unsigned_settings_accept_values_beyond_i32() {
        let c = config(&[
            ("SNAKE_WIDTH", "400"),
            ("SNAKE_SPEED", "3"),
            ("SNAKE_SEED", "4000000000"),
        ]);
        assert_eq!(c.game.width, 400);
        assert_eq!(c.game.speed, 3);
        assert_eq!(c.seed, Some(4_000_000_000));
    }

    #[test]
    fn test_zero_speed_keeps_custom_board() {
        let c = config(&[("SNAKE_WIDTH", "400"), ("SNAKE_SPEED", "0")]);
        assert_eq!(c.game.width, 400);
        assert_eq!(c.game.speed, 1);
    }

    #[test]
    fn test_oversized_board_falls_back() {
        let c = config(&[("SNAKE_WIDTH", "400000")]);
        assert_eq!(c.game, GameConfig::default());
    }
}
