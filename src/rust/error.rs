use crate::config::Field;

/// One or more required fields were not supplied.
///
/// Lists every missing field, in canonical field order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required parameters: {}", join_fields(.missing))]
pub struct MissingFields {
    missing: Vec<Field>,
}

impl MissingFields {
    pub fn new(missing: Vec<Field>) -> Self {
        Self { missing }
    }

    pub fn fields(&self) -> &[Field] {
        &self.missing
    }

    /// Wire names of the missing fields, e.g. `["upperClo", "temp"]`.
    pub fn names(&self) -> Vec<&'static str> {
        self.missing.iter().map(|f| f.wire_name()).collect()
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| f.wire_name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure talking to the prediction service.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("API request failed with status code: {status}, body: {body}")]
    Status { status: u16, body: String },
    #[error("API request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl TransportError {
    /// HTTP status of the response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
        }
    }

    /// Raw response body, if one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } => Some(body),
            Self::Network(_) => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TempFeelError {
    /// Required inputs are missing; supply them and retry.
    #[error("Validation error: {0}")]
    Validation(#[from] MissingFields),
    /// The wire map broke its own invariants. Indicates a defect, not bad input.
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    /// The response body matched none of the accepted shapes.
    #[error("Decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, TempFeelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = MissingFields::new(vec![Field::UpperClo, Field::Temp]);
        assert_eq!(err.to_string(), "Missing required parameters: upperClo, temp");
        assert_eq!(err.names(), vec!["upperClo", "temp"]);
    }

    #[test]
    fn test_status_error_keeps_body() {
        let err = TransportError::Status {
            status: 503,
            body: "{\"error\": \"No feels model loaded\"}".to_string(),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.body(), Some("{\"error\": \"No feels model loaded\"}"));
        assert!(err.to_string().contains("503"));
    }
}
