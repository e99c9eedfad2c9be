use clap::Parser;
use sdapi_probe::core::report;
use sdapi_probe::utils::{logger, validation::Validate};
use sdapi_probe::{CliConfig, ConsoleSink, Detector};

const EXIT_NOT_FOUND: i32 = 1;
const EXIT_CONFIG_ERROR: i32 = 2;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration rejected: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let detector = match Detector::from_config(settings) {
        Ok(detector) => detector,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let mut sink = ConsoleSink;
    report::write_all(&mut sink, &report::banner());

    match detector.detect(&mut sink).await {
        Some(detection) => {
            report::write_all(&mut sink, &report::ready(&detection.base_url));
        }
        None => {
            println!("\n💡 Automatic1111 not found. Please start it first.");
            std::process::exit(EXIT_NOT_FOUND);
        }
    }
}
