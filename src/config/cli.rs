use crate::config::toml_config::TomlConfig;
use crate::config::ProbeSettings;
use crate::utils::error::Result;
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "sdapi-probe")]
#[command(about = "Detect a local Automatic1111 (sdapi) image-generation server")]
pub struct CliConfig {
    /// Candidate ports in priority order (default: 7086,7860)
    #[arg(short, long, value_delimiter = ',')]
    pub ports: Option<Vec<u16>>,

    /// Host to probe (default: localhost)
    #[arg(long)]
    pub host: Option<String>,

    /// Per-request timeout in seconds (default: 5)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Built-in constants, then the TOML file, then command-line flags.
    pub fn resolve(&self) -> Result<ProbeSettings> {
        let mut settings = ProbeSettings::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(ports) = &self.ports {
            settings.ports = ports.clone();
        }
        if let Some(secs) = self.timeout {
            settings.timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = CliConfig::try_parse_from(["sdapi-probe"]).unwrap();
        assert_eq!(cli.resolve().unwrap(), ProbeSettings::default());
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[probe]\nports = [9000]\ntimeout_seconds = 2\nhost = \"127.0.0.1\"").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::try_parse_from(["sdapi-probe", "--config", &path, "--ports", "7860,7086"])
            .unwrap();
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.ports, vec![7860, 7086]);
        assert_eq!(settings.timeout, Duration::from_secs(2));
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = CliConfig::try_parse_from(["sdapi-probe", "-c", "/nonexistent/sdapi-probe.toml"])
            .unwrap();
        assert!(cli.resolve().is_err());
    }
}
