//! Scene configuration read from the environment.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::types::{STAR_COUNT, TICK_MS};

/// Runtime settings for one animation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneConfig {
    pub tick_ms: u32,
    pub star_count: usize,
    pub seed: u32,
    pub assets_dir: PathBuf,
    pub multi_shot: bool,
    pub log_path: Option<PathBuf>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            star_count: STAR_COUNT,
            seed: 1,
            assets_dir: PathBuf::from("assets"),
            multi_shot: false,
            log_path: None,
        }
    }
}

impl SceneConfig {
    /// Create from `STARFIELD_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = lookup("STARFIELD_TICK_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.tick_ms);

        let star_count = lookup("STARFIELD_STARS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.star_count);

        let seed = lookup("STARFIELD_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        let assets_dir = lookup("STARFIELD_ASSETS_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.assets_dir);

        let multi_shot = lookup("STARFIELD_MULTI_SHOT")
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true")
            })
            .unwrap_or(false);

        let log_path = lookup("STARFIELD_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        Self {
            tick_ms,
            star_count,
            seed,
            assets_dir,
            multi_shot,
            log_path,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Paths of the two spaceship frames.
    pub fn frame_paths(&self) -> [PathBuf; 2] {
        [
            self.assets_dir.join("rocket_frame_1.txt"),
            self.assets_dir.join("rocket_frame_2.txt"),
        ]
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
