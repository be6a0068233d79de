use log::info;

use crate::client::{ClientConfig, PredictionClient, FEELS_ENDPOINT};
use crate::config::{validate, Config, Feeling, Field};
use crate::decode::{Prediction, ResultDecoder};
use crate::error::Result;
use crate::wire::{to_wire_map, WireMap};

/// Feeling predictions backed by the remote classifier.
///
/// Runs the whole pipeline for one config: validate, serialize, post, decode.
/// Holds no mutable state, so a single instance can serve many threads.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use tempfeel::{ClientConfig, Config, TempFeel};
///
/// let tempfeel = TempFeel::new(&ClientConfig::default())?;
/// let config = Config::builder().upper_clo(0.3).lower_clo(0.12).temp(0).build();
/// println!("It will feel: {}", tempfeel.predict_feeling(&config)?);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TempFeel {
    client: PredictionClient,
    decoder: ResultDecoder,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<TempFeel>();
        assert_send_sync::<Config>();
    }
};

impl TempFeel {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = PredictionClient::new(config)?;
        let decoder = ResultDecoder::new(config.policy);
        info!(
            "Prediction service at {} (decode policy: {:?})",
            client.base_url(),
            decoder.policy()
        );
        Ok(Self { client, decoder })
    }

    /// Builds a predictor from [`ClientConfig::from_env`].
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env())
    }

    /// Validates `config` for a feeling prediction and encodes it as a
    /// request instance, without contacting the service.
    pub fn prepare_feeling_instance(config: &Config) -> Result<WireMap> {
        validate(config, Field::Feels)?;
        to_wire_map(config, Some(Field::Feels))
    }

    /// Predicts how the described conditions will feel.
    ///
    /// # Errors
    /// * [`Validation`](crate::TempFeelError::Validation) if `upperClo`, `lowerClo` or `temp` is unset
    /// * [`Transport`](crate::TempFeelError::Transport) on network failure or a non-200 status
    /// * [`Decode`](crate::TempFeelError::Decode) if the response is unusable and the policy is strict
    pub fn predict_feeling(&self, config: &Config) -> Result<Feeling> {
        Ok(self.predict(config)?.feeling)
    }

    /// Like [`predict_feeling`](Self::predict_feeling), also returning the
    /// class probabilities and model accuracy when the service sends them.
    pub fn predict(&self, config: &Config) -> Result<Prediction> {
        let instance = Self::prepare_feeling_instance(config)?;
        let body = self.client.predict(FEELS_ENDPOINT, &instance)?;
        let prediction = self.decoder.decode_prediction(&body)?;
        info!("Predicted feeling: {}", prediction.feeling);
        Ok(prediction)
    }
}
