use log::debug;

use super::config::Config;
use super::types::Field;
use crate::error::MissingFields;

/// True iff `upperClo`, `lowerClo` and `temp` were all explicitly set.
pub fn can_predict_feeling(config: &Config) -> bool {
    [Field::UpperClo, Field::LowerClo, Field::Temp]
        .into_iter()
        .all(|f| config.is_set(f))
}

/// Checks that every required field except `excluding` was supplied.
///
/// `excluding` names the field being predicted, which is legitimately absent.
/// On failure every missing field is reported, in canonical order
/// (`upperClo`, `lowerClo`, `temp`, `feels`).
pub fn validate(config: &Config, excluding: Field) -> Result<(), MissingFields> {
    let missing: Vec<Field> = Field::REQUIRED
        .into_iter()
        .filter(|&f| f != excluding && !config.is_set(f))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        debug!("Config is missing {} required field(s) (excluding {})", missing.len(), excluding);
        Err(MissingFields::new(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, Feeling};

    #[test]
    fn test_can_predict_feeling() {
        assert!(!can_predict_feeling(&ConfigBuilder::new().build()));
        assert!(!can_predict_feeling(&ConfigBuilder::new().clo(0.2).build()));
        assert!(can_predict_feeling(&ConfigBuilder::new().clo(0.2).temp(-3).build()));
    }

    #[test]
    fn test_reports_every_missing_field_in_order() {
        let err = validate(&ConfigBuilder::new().build(), Field::Feels).unwrap_err();
        assert_eq!(err.fields(), &[Field::UpperClo, Field::LowerClo, Field::Temp]);
    }

    #[test]
    fn test_every_subset_reports_exactly_that_subset() {
        let required = [Field::UpperClo, Field::LowerClo, Field::Temp];
        for mask in 0u8..8 {
            let mut builder = ConfigBuilder::new();
            let mut expected = Vec::new();
            for (i, field) in required.iter().enumerate() {
                let present = mask & (1 << i) != 0;
                if present {
                    builder = match field {
                        Field::UpperClo => builder.upper_clo(0.3),
                        Field::LowerClo => builder.lower_clo(0.12),
                        _ => builder.temp(0),
                    };
                } else {
                    expected.push(*field);
                }
            }
            let result = validate(&builder.build(), Field::Feels);
            if expected.is_empty() {
                assert!(result.is_ok());
            } else {
                assert_eq!(result.unwrap_err().fields(), expected.as_slice());
            }
        }
    }

    #[test]
    fn test_excluded_field_is_never_reported() {
        let config = ConfigBuilder::new().clo(0.3).feels(Feeling::Warm).build();
        assert!(validate(&config, Field::Temp).is_ok());

        let config = ConfigBuilder::new().build();
        let err = validate(&config, Field::Temp).unwrap_err();
        assert_eq!(err.fields(), &[Field::UpperClo, Field::LowerClo, Field::Feels]);
    }

    #[test]
    fn test_feels_required_when_predicting_something_else() {
        let config = ConfigBuilder::new().clo(0.3).temp(4).build();
        let err = validate(&config, Field::Hr).unwrap_err();
        assert_eq!(err.names(), vec!["feels"]);
    }
}
