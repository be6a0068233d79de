use anyhow::Result;
use clap::Parser;
use log::info;
use tempfeel::{ClientConfig, Config, DecodePolicy, Intensity, TempFeel};

#[derive(Parser)]
#[command(author, version, about = "Predict how the given conditions will feel", long_about = None)]
struct Args {
    /// Upper-body clothing insulation (clo)
    #[arg(long)]
    upper_clo: Option<f64>,

    /// Lower-body clothing insulation (clo)
    #[arg(long)]
    lower_clo: Option<f64>,

    /// Sets both upper- and lower-body insulation (clo)
    #[arg(long, conflicts_with_all = ["upper_clo", "lower_clo"])]
    clo: Option<f64>,

    /// Air temperature in °C
    #[arg(long, allow_negative_numbers = true)]
    temp: Option<i32>,

    #[arg(long)]
    sun: bool,

    #[arg(long)]
    headwind: bool,

    /// NONE, LIGHT, MEDIUM or HEAVY
    #[arg(long, default_value = "NONE")]
    snow: Intensity,

    /// NONE, LIGHT, MEDIUM or HEAVY
    #[arg(long, default_value = "NONE")]
    rain: Intensity,

    #[arg(long)]
    fatigued: bool,

    /// Heart rate (bpm)
    #[arg(long)]
    hr: Option<i32>,

    /// Prediction service base URL (overrides TEMPFEEL_API_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Answer COOL instead of failing when the response cannot be decoded
    #[arg(long)]
    lenient: bool,

    /// Print the request instance instead of calling the service
    #[arg(long)]
    dry_run: bool,

    /// Print the prediction as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn to_config(&self) -> Config {
        let mut builder = Config::builder()
            .sun(self.sun)
            .headwind(self.headwind)
            .snow(self.snow)
            .rain(self.rain)
            .fatigued(self.fatigued);

        if let Some(clo) = self.clo {
            builder = builder.clo(clo);
        }
        if let Some(v) = self.upper_clo {
            builder = builder.upper_clo(v);
        }
        if let Some(v) = self.lower_clo {
            builder = builder.lower_clo(v);
        }
        if let Some(v) = self.temp {
            builder = builder.temp(v);
        }
        if let Some(v) = self.hr {
            builder = builder.hr(v);
        }
        builder.build()
    }

    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        if let Some(url) = &self.base_url {
            config = config.with_base_url(url.as_str());
        }
        if self.lenient {
            config = config.with_policy(DecodePolicy::Lenient);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = args.to_config();

    if args.dry_run {
        let instance = TempFeel::prepare_feeling_instance(&config)?;
        println!("{}", serde_json::to_string_pretty(&tempfeel::build_request_body(&instance))?);
        return Ok(());
    }

    let client_config = args.client_config();
    info!("Using prediction service at {}", client_config.base_url);
    let tempfeel = TempFeel::new(&client_config)?;

    let prediction = tempfeel.predict(&config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
        return Ok(());
    }
    println!("It will feel: {}", prediction.feeling);
    if let Some(probabilities) = prediction.probabilities {
        for (feeling, p) in tempfeel::Feeling::ALL.iter().zip(probabilities) {
            println!("  {}: {:.1}%", feeling, p * 100.0);
        }
    }
    if let Some(accuracy) = prediction.model_accuracy {
        println!("Model accuracy: {:.1}%", accuracy * 100.0);
    }

    Ok(())
}
