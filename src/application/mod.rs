pub mod clock;
pub mod config;
mod controller;

pub use clock::TickClock;
pub use config::{Cli, ConfigError, RuleKind, SimulationConfig};
pub use controller::{Command, Controller, Event, Flow, Frame, Playback, Renderer};
