use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geometry::Size;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "term-snake", version, about = "Snake in the terminal")]
pub struct Settings {
    /// Playable board width
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(3..))]
    pub width: u16,

    /// Playable board height
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(3..))]
    pub height: u16,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u64).range(1..))]
    pub delay_ms: u64,

    /// Seed for apple placement, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where log output goes while the terminal is in raw mode
    #[arg(long, default_value = "snake.log")]
    pub log_file: PathBuf,
}

impl Settings {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
