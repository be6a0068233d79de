//! Mapping of a [`Config`] onto the service's request format.

use log::error;
use serde_json::{json, Map, Number, Value};

use crate::config::{Config, Field};
use crate::error::{Result, TempFeelError};

/// One request instance: wire field name to numeric value.
pub type WireMap = Map<String, Value>;

/// Encodes `config` as a flat key/value instance.
///
/// Booleans become `0`/`1`, [`Intensity`](crate::Intensity) and
/// [`Feeling`](crate::Feeling) become their ordinals, numbers pass through.
/// Optional fields always contribute a value. An unset `feels` encodes as `0`.
///
/// The result holds one entry per field, minus `excluding` when given. Any
/// other entry count, or a value that cannot be represented in JSON, is
/// reported as [`TempFeelError::Serialization`].
pub fn to_wire_map(config: &Config, excluding: Option<Field>) -> Result<WireMap> {
    let mut map = WireMap::new();
    for field in Field::ALL {
        if Some(field) == excluding {
            continue;
        }
        map.insert(field.wire_name().to_string(), encode_field(config, field)?);
    }

    let expected = Field::ALL.len() - usize::from(excluding.is_some());
    if map.len() != expected {
        error!("Wire map has {} entries, expected {}", map.len(), expected);
        return Err(TempFeelError::Serialization(format!(
            "wire map has {} entries, expected {}",
            map.len(),
            expected
        )));
    }
    Ok(map)
}

/// Wraps a single instance in the service's batch envelope:
/// `{"instances": [ {...} ]}`.
pub fn build_request_body(instance: &WireMap) -> Value {
    json!({ "instances": [instance] })
}

fn encode_field(config: &Config, field: Field) -> Result<Value> {
    let value = match field {
        Field::UpperClo => float(field, config.upper_clo)?,
        Field::LowerClo => float(field, config.lower_clo)?,
        Field::Temp => Value::from(config.temp),
        Field::Sun => flag(config.sun),
        Field::Headwind => flag(config.headwind),
        Field::Snow => Value::from(config.snow.code()),
        Field::Rain => Value::from(config.rain.code()),
        Field::Fatigued => flag(config.fatigued),
        Field::Hr => Value::from(config.hr),
        Field::Feels => Value::from(config.feels.map_or(0, |f| f.code())),
    };
    Ok(value)
}

fn flag(value: bool) -> Value {
    Value::from(u8::from(value))
}

fn float(field: Field, value: f64) -> Result<Value> {
    Number::from_f64(value).map(Value::Number).ok_or_else(|| {
        error!("Field {} has non-finite value {}", field, value);
        TempFeelError::Serialization(format!("{} must be a finite number, got {}", field, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigBuilder, Feeling, Intensity};

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config = ConfigBuilder::new().upper_clo(0.3).lower_clo(0.12).temp(0).build();
        let map = to_wire_map(&config, Some(Field::Feels)).unwrap();

        assert_eq!(map.len(), 9);
        assert!(!map.contains_key("feels"));
        assert_eq!(map["upperClo"], json!(0.3));
        assert_eq!(map["lowerClo"], json!(0.12));
        assert_eq!(map["temp"], json!(0));
        assert_eq!(map["hr"], json!(80));
        assert_eq!(map["snow"], json!(0));
        assert_eq!(map["rain"], json!(0));
        assert_eq!(map["sun"], json!(0));
        assert_eq!(map["headwind"], json!(0));
        assert_eq!(map["fatigued"], json!(0));
    }

    #[test]
    fn test_full_map_without_exclusion() {
        let config = ConfigBuilder::new().clo(0.2).temp(3).feels(Feeling::Hot).build();
        let map = to_wire_map(&config, None).unwrap();
        assert_eq!(map.len(), Field::ALL.len());
        assert_eq!(map["feels"], json!(3));
    }

    #[test]
    fn test_every_exclusion_drops_exactly_one_key() {
        let config = ConfigBuilder::new().clo(0.2).temp(3).build();
        for field in Field::ALL {
            let map = to_wire_map(&config, Some(field)).unwrap();
            assert_eq!(map.len(), Field::ALL.len() - 1);
            assert!(!map.contains_key(field.wire_name()));
        }
    }

    #[test]
    fn test_categorical_ordinals() {
        for level in Intensity::ALL {
            let config = ConfigBuilder::new().snow(level).rain(level).build();
            let map = to_wire_map(&config, None).unwrap();
            assert_eq!(map["snow"], json!(level.code()));
            assert_eq!(Intensity::from_code(map["rain"].as_i64().unwrap()), Some(level));
        }
        for feeling in Feeling::ALL {
            let config = ConfigBuilder::new().feels(feeling).build();
            let map = to_wire_map(&config, None).unwrap();
            assert_eq!(Feeling::from_code(map["feels"].as_i64().unwrap()), Some(feeling));
        }
    }

    #[test]
    fn test_non_finite_clo_is_a_serialization_error() {
        let config = ConfigBuilder::new().upper_clo(f64::NAN).lower_clo(0.1).temp(1).build();
        let err = to_wire_map(&config, Some(Field::Feels)).unwrap_err();
        assert!(matches!(err, TempFeelError::Serialization(_)));
    }

    #[test]
    fn test_request_envelope() {
        let config = ConfigBuilder::new().clo(0.2).temp(3).build();
        let map = to_wire_map(&config, Some(Field::Feels)).unwrap();
        let body = build_request_body(&map);
        let instances = body["instances"].as_array().unwrap();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0]["temp"], json!(3));
    }
}
