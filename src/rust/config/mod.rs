mod builder;
#[allow(clippy::module_inception)]
mod config;
mod types;
mod validation;

pub use builder::ConfigBuilder;
pub use config::Config;
pub use types::{Feeling, Field, FieldSet, Intensity};
pub use validation::{can_predict_feeling, validate};
