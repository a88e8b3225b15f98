use std::fmt;
use std::str::FromStr;

/// Default probability of spontaneous ignition per tree per generation
pub const DEFAULT_IGNITION: f64 = 0.001;
/// Default probability of regrowth per empty cell per generation
pub const DEFAULT_GROWTH: f64 = 0.025;

/// Live stochastic parameters of the forest-fire model.
/// Deterministic rules carry them along without reading them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    /// Ignition probability `f`
    pub ignition: f64,
    /// Growth probability `p`
    pub growth: f64,
}

impl Parameters {
    pub const fn new(ignition: f64, growth: f64) -> Self {
        Self { ignition, growth }
    }

    pub const fn get(&self, name: ParameterName) -> f64 {
        match name {
            ParameterName::Ignition => self.ignition,
            ParameterName::Growth => self.growth,
        }
    }

    pub fn set(&mut self, name: ParameterName, value: f64) {
        match name {
            ParameterName::Ignition => self.ignition = value,
            ParameterName::Growth => self.growth = value,
        }
    }

    /// Builder-style variant of [`Parameters::set`]
    pub fn with(mut self, name: ParameterName, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Ratio p/f shown on the status line; infinite when f is zero
    pub fn growth_to_ignition(&self) -> f64 {
        self.growth / self.ignition
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(DEFAULT_IGNITION, DEFAULT_GROWTH)
    }
}

/// Name of an editable parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterName {
    Ignition,
    Growth,
}

impl ParameterName {
    pub fn all() -> [ParameterName; 2] {
        [ParameterName::Ignition, ParameterName::Growth]
    }

    /// Single-letter symbol used on the status line and in commands
    pub const fn symbol(self) -> &'static str {
        match self {
            ParameterName::Ignition => "f",
            ParameterName::Growth => "p",
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error for a parameter name nobody recognises
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown parameter '{0}' (expected f, ignition, p or growth)")]
pub struct UnknownParameter(pub String);

impl FromStr for ParameterName {
    type Err = UnknownParameter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "ignition" => Ok(ParameterName::Ignition),
            "p" | "growth" => Ok(ParameterName::Growth),
            _ => Err(UnknownParameter(s.to_string())),
        }
    }
}
