//! Thermal-comfort predictions from a remote classifier.
//!
//! Describe the conditions (clothing insulation, temperature, sun, wind,
//! precipitation, fatigue, heart rate) with a [`ConfigBuilder`], then ask the
//! prediction service how they will feel.
//!
//! # Basic Usage
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tempfeel::{ClientConfig, Config, Intensity, TempFeel};
//!
//! let config = Config::builder()
//!     .upper_clo(0.3)
//!     .lower_clo(0.12)
//!     .temp(0)
//!     .headwind(true)
//!     .snow(Intensity::Light)
//!     .build();
//!
//! let tempfeel = TempFeel::new(&ClientConfig::from_env())?;
//! let feeling = tempfeel.predict_feeling(&config)?;
//! println!("It will feel: {}", feeling);
//! # Ok(())
//! # }
//! ```
//!
//! # Copy and override
//!
//! A built [`Config`] never changes. Use [`Config::to_builder`] to derive a
//! variant:
//!
//! ```
//! use tempfeel::Config;
//!
//! let morning = Config::builder().clo(0.5).temp(4).build();
//! let afternoon = morning.to_builder().temp(15).sun(true).build();
//! assert_eq!(morning.temp(), Some(4));
//! assert_eq!(afternoon.temp(), Some(15));
//! ```
//!
//! # Decoding
//!
//! Responses are resolved by [`ResultDecoder`]. Unknown labels and
//! out-of-range codes always become [`Feeling::Cool`]; a body with no
//! recognised prediction field is an error under [`DecodePolicy::Strict`]
//! and `Cool` under [`DecodePolicy::Lenient`].

pub mod client;
pub mod config;
pub mod decode;
pub mod error;
mod predictor;
pub mod wire;

pub use client::{ClientConfig, PredictionClient, FEELS_ENDPOINT};
pub use config::{can_predict_feeling, validate, Config, ConfigBuilder, Feeling, Field, Intensity};
pub use decode::{try_decode_feeling, DecodePolicy, Prediction, ResponseBody, ResultDecoder};
pub use error::{MissingFields, Result, TempFeelError, TransportError};
pub use predictor::TempFeel;
pub use wire::{build_request_body, to_wire_map, WireMap};

pub fn init_logger() {
    env_logger::init();
}
