//! Command-line options and the validated session configuration.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};

use super::clock::DEFAULT_FPS;
use crate::domain::{DEFAULT_GROWTH, DEFAULT_IGNITION, Parameters};

/// Pixel size of one cell when nothing else is configured
pub const DEFAULT_CELL_SIZE: f32 = 8.0;
/// Height reserved above the grid for the status line
pub const STATUS_HEIGHT: f32 = 24.0;

/// Which rule family drives the session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum RuleKind {
    /// Stochastic forest fire (empty, tree, burning)
    #[default]
    Forest,
    /// Conway's Game of Life (B3/S23)
    Life,
}

/// Raw command-line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "episim", version, about = "Forest-fire and Life simulator with rewindable history")]
pub struct Cli {
    /// Rule family to simulate
    #[arg(long, value_enum, default_value_t = RuleKind::Forest)]
    pub rule: RuleKind,

    /// Ignition probability f
    #[arg(short = 'f', long, default_value_t = DEFAULT_IGNITION)]
    pub ignition: f64,

    /// Growth probability p
    #[arg(short = 'p', long, default_value_t = DEFAULT_GROWTH)]
    pub growth: f64,

    /// Grid rows (default: fit the window)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns (default: fit the window)
    #[arg(long)]
    pub cols: Option<usize>,

    /// Generations per second while playing
    #[arg(long, default_value_t = DEFAULT_FPS)]
    pub fps: f32,

    /// Random seed (default: wall-clock time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pixel size of one cell
    #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Probability {name} must lie in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Frame rate must be positive, got {0}")]
    InvalidFps(f32),
    #[error("Cell size must be positive, got {0}")]
    InvalidCellSize(f32),
    #[error("Grid dimensions must be at least 1x1")]
    InvalidDimensions,
}

/// Validated session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub rule: RuleKind,
    pub parameters: Parameters,
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub fps: f32,
    pub seed: u64,
    pub cell_size: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rule: RuleKind::default(),
            parameters: Parameters::default(),
            rows: None,
            cols: None,
            fps: DEFAULT_FPS,
            seed: clock_seed(),
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

/// Seed derived from the wall clock
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

impl SimulationConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("f", self.parameters.ignition)?;
        check_probability("p", self.parameters.growth)?;
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::InvalidFps(self.fps));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::InvalidCellSize(self.cell_size));
        }
        if self.rows == Some(0) || self.cols == Some(0) {
            return Err(ConfigError::InvalidDimensions);
        }
        Ok(())
    }

    /// Grid size: explicit dimensions win, otherwise fit the drawable area
    pub fn dimensions_for(&self, width: f32, height: f32) -> (usize, usize) {
        let fit = |pixels: f32| ((pixels / self.cell_size).floor() as usize).max(1);
        let rows = self.rows.unwrap_or_else(|| fit(height - STATUS_HEIGHT));
        let cols = self.cols.unwrap_or_else(|| fit(width));
        (rows, cols)
    }

    /// Window size needed to show explicit dimensions, if any were given
    pub fn window_size(&self) -> Option<(i32, i32)> {
        let (rows, cols) = (self.rows?, self.cols?);
        let width = cols as f32 * self.cell_size;
        let height = rows as f32 * self.cell_size + STATUS_HEIGHT;
        Some((width.ceil() as i32, height.ceil() as i32))
    }
}

impl TryFrom<Cli> for SimulationConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let config = Self {
            rule: cli.rule,
            parameters: Parameters::new(cli.ignition, cli.growth),
            rows: cli.rows,
            cols: cli.cols,
            fps: cli.fps,
            seed: cli.seed.unwrap_or_else(clock_seed),
            cell_size: cli.cell_size,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SimulationConfig, ConfigError> {
        let cli = Cli::try_parse_from(std::iter::once("episim").chain(args.iter().copied())).unwrap();
        SimulationConfig::try_from(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.rule, RuleKind::Forest);
        assert_eq!(config.parameters, Parameters::default());
        assert_eq!(config.fps, 20.0);
        assert_eq!(config.rows, None);
    }

    #[test]
    fn test_explicit_values() {
        let config = parse(&[
            "--rule", "life", "-f", "0.5", "-p", "0.1", "--rows", "30", "--cols", "40", "--seed", "7",
        ])
        .unwrap();
        assert_eq!(config.rule, RuleKind::Life);
        assert_eq!(config.parameters, Parameters::new(0.5, 0.1));
        assert_eq!(config.seed, 7);
        assert_eq!(config.dimensions_for(10.0, 10.0), (30, 40));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            parse(&["-f", "1.5"]),
            Err(ConfigError::InvalidProbability { name: "f", .. })
        ));
        assert!(matches!(
            parse(&["--growth=-0.1"]),
            Err(ConfigError::InvalidProbability { name: "p", .. })
        ));
        assert!(matches!(parse(&["--fps", "0"]), Err(ConfigError::InvalidFps(_))));
        assert!(matches!(parse(&["--rows", "0"]), Err(ConfigError::InvalidDimensions)));
        assert!(matches!(parse(&["--cell-size", "0"]), Err(ConfigError::InvalidCellSize(_))));
    }

    #[test]
    fn test_dimensions_fit_window() {
        let config = SimulationConfig {
            cell_size: 10.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.dimensions_for(1000.0, 800.0 + STATUS_HEIGHT), (80, 100));
        assert_eq!(config.dimensions_for(3.0, 3.0), (1, 1));
        assert_eq!(config.window_size(), None);
    }

    #[test]
    fn test_window_size_for_explicit_grid() {
        let config = SimulationConfig {
            rows: Some(10),
            cols: Some(20),
            cell_size: 5.0,
            ..SimulationConfig::default()
        };
        assert_eq!(config.window_size(), Some((100, 50 + STATUS_HEIGHT as i32)));
    }
}
