use std::time::Duration;

use anyhow::{ensure, Context};
use clap::Parser;

use crate::renderer::layout::Geometry;

/// Mini Game of Life on a bounded board.
#[derive(Parser, Debug, Clone)]
#[command(name = "life", version, about)]
pub struct Config {
    /// Number of board rows
    #[arg(long, default_value_t = 30)]
    pub rows: usize,

    /// Number of board columns
    #[arg(long, default_value_t = 30)]
    pub cols: usize,

    /// Size of one cell in logical pixels
    #[arg(long, default_value_t = 20)]
    pub cell_size: u32,

    /// Milliseconds between ticks
    #[arg(long, default_value_t = 100)]
    pub interval_ms: u64,

    /// Seed for the initial board and the color cycle. Random if omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start running instead of paused
    #[arg(long)]
    pub start: bool,

    /// Window title
    #[arg(long, default_value = "Mini Game of Life")]
    pub title: String,
}

impl Config {
    /// Zero board dimensions are reported when the board is built; this covers the rest.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.cell_size > 0, "--cell-size must be positive");
        ensure!(self.interval_ms > 0, "--interval-ms must be positive");
        self.geometry()?;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn geometry(&self) -> anyhow::Result<Geometry> {
        Geometry::new(self.rows, self.cols, self.cell_size).with_context(|| {
            format!(
                "A {}x{} board with {}px cells does not fit in a window",
                self.rows, self.cols, self.cell_size
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_setup() {
        let config = Config::try_parse_from(["life"]).unwrap();

        assert_eq!(config.rows, 30);
        assert_eq!(config.cols, 30);
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.interval(), Duration::from_millis(100));
        assert_eq!(config.seed, None);
        assert!(!config.start);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn flags_override_defaults() {
        let config = Config::try_parse_from([
            "life",
            "--rows",
            "12",
            "--cols",
            "40",
            "--cell-size",
            "8",
            "--interval-ms",
            "250",
            "--seed",
            "77",
            "--start",
        ])
        .unwrap();

        assert_eq!(config.geometry().unwrap(), Geometry::new(12, 40, 8).unwrap());
        assert_eq!(config.interval(), Duration::from_millis(250));
        assert_eq!(config.seed, Some(77));
        assert!(config.start);
    }

    #[test]
    fn zero_cell_size_and_interval_are_rejected() {
        let config = Config::try_parse_from(["life", "--cell-size", "0"]).unwrap();
        assert!(config.validate().is_err());

        let config = Config::try_parse_from(["life", "--interval-ms", "0"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn oversized_board_is_rejected() {
        let huge = (u32::MAX as usize + 1).to_string();
        let config =
            Config::try_parse_from(["life", "--rows", huge.as_str(), "--cols", "4"]).unwrap();
        assert!(config.validate().is_err());

        let config = Config::try_parse_from(["life", "--cols", "300000000", "--cell-size", "20"])
            .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_rows_do_not_parse() {
        assert!(Config::try_parse_from(["life", "--rows", "-3"]).is_err());
    }
}
