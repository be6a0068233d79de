//! Resolution of the service's response body into a [`Feeling`].
//!
//! Different service revisions answer with different shapes. Each shape is
//! handled by one strategy; strategies are tried in a fixed order and the
//! first one that recognises the body wins.

use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::Feeling;
use crate::error::{Result, TempFeelError};

/// A decoded JSON object as returned by the service.
pub type ResponseBody = Map<String, Value>;

type DecodeStrategy = fn(&ResponseBody) -> Option<Feeling>;

/// Decode strategies in precedence order, keyed by the response field they read.
const STRATEGIES: [(&str, DecodeStrategy); 4] = [
    ("prediction_labels", from_label_list),
    ("predictions", from_code_list),
    ("prediction_label", from_prediction_label),
    ("prediction", from_prediction),
];

/// What to do when a response body matches none of the accepted shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Fail with [`TempFeelError::Decode`].
    #[default]
    Strict,
    /// Log a warning and answer [`Feeling::Cool`].
    Lenient,
}

/// A decoded prediction, with the extra details some service revisions send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub feeling: Feeling,
    /// Class probabilities for the first instance, ordered by feeling code.
    pub probabilities: Option<Vec<f64>>,
    /// Accuracy the service reports for its model.
    pub model_accuracy: Option<f64>,
}

/// Runs the strategies in order and returns the first match along with the
/// key that produced it. `None` means no accepted shape was present.
///
/// A recognised but unknown label, or an out-of-range code, is still a
/// match: it resolves to [`Feeling::Cool`].
pub fn try_decode_feeling(body: &ResponseBody) -> Option<(Feeling, &'static str)> {
    STRATEGIES
        .iter()
        .find_map(|(key, strategy)| strategy(body).map(|feeling| (feeling, *key)))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ResultDecoder {
    policy: DecodePolicy,
}

impl ResultDecoder {
    pub fn new(policy: DecodePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> DecodePolicy {
        self.policy
    }

    pub fn decode_feeling(&self, body: &ResponseBody) -> Result<Feeling> {
        match try_decode_feeling(body) {
            Some((feeling, key)) => {
                debug!("Decoded {} from '{}'", feeling, key);
                Ok(feeling)
            }
            None => self.undecodable(body),
        }
    }

    pub fn decode_prediction(&self, body: &ResponseBody) -> Result<Prediction> {
        let feeling = self.decode_feeling(body)?;
        Ok(Prediction {
            feeling,
            probabilities: body.get("probabilities").and_then(first_row),
            model_accuracy: body.get("model_accuracy").and_then(Value::as_f64),
        })
    }

    fn undecodable(&self, body: &ResponseBody) -> Result<Feeling> {
        let keys: Vec<&str> = body.keys().map(String::as_str).collect();
        match self.policy {
            DecodePolicy::Strict => Err(TempFeelError::Decode(format!(
                "response has no usable prediction field (keys: [{}])",
                keys.join(", ")
            ))),
            DecodePolicy::Lenient => {
                warn!("Response has no usable prediction field (keys: {:?}), falling back to {}", keys, Feeling::Cool);
                Ok(Feeling::Cool)
            }
        }
    }
}

fn from_label_list(body: &ResponseBody) -> Option<Feeling> {
    body.get("prediction_labels")?
        .as_array()?
        .first()?
        .as_str()
        .map(feeling_from_label)
}

fn from_code_list(body: &ResponseBody) -> Option<Feeling> {
    from_code(body.get("predictions")?.as_array()?.first()?)
}

fn from_prediction_label(body: &ResponseBody) -> Option<Feeling> {
    from_scalar(body.get("prediction_label")?)
}

fn from_prediction(body: &ResponseBody) -> Option<Feeling> {
    from_scalar(body.get("prediction")?)
}

fn from_scalar(value: &Value) -> Option<Feeling> {
    match value {
        Value::String(label) => Some(feeling_from_label(label)),
        Value::Number(_) => from_code(value),
        _ => None,
    }
}

fn from_code(value: &Value) -> Option<Feeling> {
    if let Some(code) = value.as_i64() {
        return Some(Feeling::from_code(code).unwrap_or_else(|| {
            warn!("Prediction code {} is out of range, using {}", code, Feeling::Cool);
            Feeling::Cool
        }));
    }
    value.as_u64().map(|code| {
        warn!("Prediction code {} is out of range, using {}", code, Feeling::Cool);
        Feeling::Cool
    })
}

fn feeling_from_label(label: &str) -> Feeling {
    Feeling::from_label(label).unwrap_or_else(|| {
        warn!("Unknown prediction label '{}', using {}", label, Feeling::Cool);
        Feeling::Cool
    })
}

/// Accepts either `[[p0, p1, ...], ...]` (one row per instance) or a flat `[p0, p1, ...]`.
fn first_row(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    let row = match items.first()? {
        Value::Array(inner) => inner,
        _ => items,
    };
    row.iter().map(Value::as_f64).collect()
}
