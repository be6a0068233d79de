use super::config::Config;
use super::types::{Feeling, Field, Intensity};

/// Mutable staging area for a [`Config`].
///
/// Setters consume and return the builder so calls can be chained. Setting a
/// required field also records it as explicitly provided. [`build`](Self::build)
/// never fails; missing required fields are only reported at predict time.
///
/// # Example
/// ```
/// use tempfeel::{ConfigBuilder, Intensity};
///
/// let config = ConfigBuilder::new()
///     .upper_clo(0.3)
///     .lower_clo(0.12)
///     .temp(0)
///     .rain(Intensity::Light)
///     .build();
/// assert_eq!(config.temp(), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    staged: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            staged: Config::default(),
        }
    }

    pub(crate) fn from_config(config: Config) -> Self {
        Self { staged: config }
    }

    /// Upper-body clothing insulation, in clo.
    pub fn upper_clo(mut self, value: f64) -> Self {
        self.staged.upper_clo = value;
        self.staged.provided.insert(Field::UpperClo);
        self
    }

    /// Lower-body clothing insulation, in clo.
    pub fn lower_clo(mut self, value: f64) -> Self {
        self.staged.lower_clo = value;
        self.staged.provided.insert(Field::LowerClo);
        self
    }

    /// Sets both upper- and lower-body insulation to `value`.
    pub fn clo(self, value: f64) -> Self {
        self.upper_clo(value).lower_clo(value)
    }

    /// Air temperature in °C.
    pub fn temp(mut self, value: i32) -> Self {
        self.staged.temp = value;
        self.staged.provided.insert(Field::Temp);
        self
    }

    pub fn sun(mut self, value: bool) -> Self {
        self.staged.sun = value;
        self.staged.provided.insert(Field::Sun);
        self
    }

    pub fn headwind(mut self, value: bool) -> Self {
        self.staged.headwind = value;
        self.staged.provided.insert(Field::Headwind);
        self
    }

    pub fn snow(mut self, value: Intensity) -> Self {
        self.staged.snow = value;
        self.staged.provided.insert(Field::Snow);
        self
    }

    pub fn rain(mut self, value: Intensity) -> Self {
        self.staged.rain = value;
        self.staged.provided.insert(Field::Rain);
        self
    }

    pub fn fatigued(mut self, value: bool) -> Self {
        self.staged.fatigued = value;
        self.staged.provided.insert(Field::Fatigued);
        self
    }

    /// Heart rate in beats per minute.
    pub fn hr(mut self, value: i32) -> Self {
        self.staged.hr = value;
        self.staged.provided.insert(Field::Hr);
        self
    }

    /// The target label, used when the config describes a known outcome
    /// rather than a feeling to be predicted.
    pub fn feels(mut self, value: Feeling) -> Self {
        self.staged.feels = Some(value);
        self.staged.provided.insert(Field::Feels);
        self
    }

    /// Freezes the staged values into an immutable [`Config`].
    ///
    /// The builder remains usable; later setter calls do not affect
    /// configs already built from it.
    pub fn build(&self) -> Config {
        self.staged.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_build_never_fails() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.upper_clo(), None);
        assert_eq!(config.lower_clo(), None);
        assert_eq!(config.temp(), None);
        assert_eq!(config.feels(), None);
        assert_eq!(config.hr(), 80);
        assert!(!config.headwind());
        assert!(!config.fatigued());
        assert_eq!(config.rain(), Intensity::None);
    }

    #[test]
    fn test_clo_sets_both_sides() {
        let config = ConfigBuilder::new().clo(0.5).build();
        assert_eq!(config.upper_clo(), Some(0.5));
        assert_eq!(config.lower_clo(), Some(0.5));
    }

    #[test]
    fn test_later_setters_do_not_affect_built_config() {
        let builder = ConfigBuilder::new().temp(10);
        let first = builder.build();
        let second = builder.temp(30).hr(140).build();

        assert_eq!(first.temp(), Some(10));
        assert_eq!(first.hr(), 80);
        assert_eq!(second.temp(), Some(30));
        assert_eq!(second.hr(), 140);
    }

    #[test]
    fn test_zero_temperature_counts_as_set() {
        let config = ConfigBuilder::new().temp(0).build();
        assert!(config.is_set(Field::Temp));
        assert_eq!(config.temp(), Some(0));
    }

    #[test]
    fn test_all_setters() {
        let config = ConfigBuilder::new()
            .upper_clo(0.08)
            .lower_clo(0.15)
            .temp(19)
            .sun(true)
            .headwind(true)
            .snow(Intensity::Heavy)
            .rain(Intensity::Medium)
            .fatigued(true)
            .hr(120)
            .feels(Feeling::Hot)
            .build();

        assert!(config.sun());
        assert!(config.headwind());
        assert_eq!(config.snow(), Intensity::Heavy);
        assert_eq!(config.rain(), Intensity::Medium);
        assert!(config.fatigued());
        assert_eq!(config.hr(), 120);
        assert_eq!(config.feels(), Some(Feeling::Hot));
    }
}
