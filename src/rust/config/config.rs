use super::builder::ConfigBuilder;
use super::types::{Feeling, Field, FieldSet, Intensity};

/// Values sent in place of required fields that were never supplied.
/// Validation rejects such configs before they reach the wire, so these
/// only surface when serializing a config directly.
pub(crate) const DEFAULT_UPPER_CLO: f64 = 0.08;
pub(crate) const DEFAULT_LOWER_CLO: f64 = 0.15;
pub(crate) const DEFAULT_TEMP: i32 = 20;

pub(crate) const DEFAULT_SUN: bool = false;
pub(crate) const DEFAULT_HEADWIND: bool = false;
pub(crate) const DEFAULT_FATIGUED: bool = false;
pub(crate) const DEFAULT_HR: i32 = 80;

/// An immutable snapshot of one prediction request's inputs.
///
/// Produced by [`ConfigBuilder::build`]. Required fields (`upperClo`,
/// `lowerClo`, `temp`, `feels`) carry a presence flag alongside their value
/// so that a defaulted field can be told apart from a supplied one.
/// Optional fields always hold a concrete value.
///
/// ```
/// use tempfeel::{Config, Field};
///
/// let config = Config::builder().clo(0.3).temp(0).build();
/// assert!(config.is_set(Field::UpperClo));
/// assert_eq!(config.hr(), 80);
/// assert_eq!(config.feels(), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub(crate) upper_clo: f64,
    pub(crate) lower_clo: f64,
    pub(crate) temp: i32,
    pub(crate) sun: bool,
    pub(crate) headwind: bool,
    pub(crate) snow: Intensity,
    pub(crate) rain: Intensity,
    pub(crate) fatigued: bool,
    pub(crate) hr: i32,
    pub(crate) feels: Option<Feeling>,
    pub(crate) provided: FieldSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upper_clo: DEFAULT_UPPER_CLO,
            lower_clo: DEFAULT_LOWER_CLO,
            temp: DEFAULT_TEMP,
            sun: DEFAULT_SUN,
            headwind: DEFAULT_HEADWIND,
            snow: Intensity::default(),
            rain: Intensity::default(),
            fatigued: DEFAULT_FATIGUED,
            hr: DEFAULT_HR,
            feels: None,
            provided: FieldSet::new(),
        }
    }
}

impl Config {
    /// Creates an empty builder: required fields unset, optional fields defaulted.
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Returns a builder seeded with this config's values and presence flags.
    /// The config itself is left untouched.
    pub fn to_builder(&self) -> ConfigBuilder {
        ConfigBuilder::from_config(self.clone())
    }

    /// Whether `field` was explicitly supplied to the builder.
    pub fn is_set(&self, field: Field) -> bool {
        self.provided.contains(field)
    }

    pub fn upper_clo(&self) -> Option<f64> {
        self.is_set(Field::UpperClo).then_some(self.upper_clo)
    }

    pub fn lower_clo(&self) -> Option<f64> {
        self.is_set(Field::LowerClo).then_some(self.lower_clo)
    }

    pub fn temp(&self) -> Option<i32> {
        self.is_set(Field::Temp).then_some(self.temp)
    }

    pub fn sun(&self) -> bool {
        self.sun
    }

    pub fn headwind(&self) -> bool {
        self.headwind
    }

    pub fn snow(&self) -> Intensity {
        self.snow
    }

    pub fn rain(&self) -> Intensity {
        self.rain
    }

    pub fn fatigued(&self) -> bool {
        self.fatigued
    }

    pub fn hr(&self) -> i32 {
        self.hr
    }

    pub fn feels(&self) -> Option<Feeling> {
        self.feels
    }
}
