use crate::core::report;
use crate::core::{ConfigProvider, Detection, ModelLookup, Probe, ProbeResult, ReportSink};
use crate::domain::model::{self, ModelSummary};
use crate::utils::error::Result;
use reqwest::{Client, StatusCode};

/// Probes the `sdapi` endpoints over HTTP with a per-request timeout.
pub struct HttpProbe<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpProbe<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self { config, client })
    }
}

fn classify_error(err: &reqwest::Error) -> ProbeResult {
    if err.is_timeout() {
        ProbeResult::Timeout
    } else if err.is_connect() {
        ProbeResult::ConnectionRefused
    } else {
        ProbeResult::OtherError(err.to_string())
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Probe for HttpProbe<C> {
    fn target_url(&self, port: u16) -> String {
        format!("{}{}", self.config.base_url(port), self.config.options_path())
    }

    async fn probe(&self, port: u16) -> ProbeResult {
        let url = self.target_url(port);
        tracing::debug!("Making probe request to: {}", url);

        match self.client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                ProbeResult::Success(Detection {
                    port,
                    base_url: self.config.base_url(port),
                    model_count: None,
                    model_name: None,
                })
            }
            Ok(response) => ProbeResult::HttpError(response.status().as_u16()),
            Err(e) => {
                tracing::debug!("Probe of {} failed: {:?}", url, e);
                classify_error(&e)
            }
        }
    }

    async fn fetch_models(&self, base_url: &str) -> ModelLookup {
        let url = format!("{}{}", base_url, self.config.models_path());
        tracing::debug!("Fetching model list from: {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return ModelLookup::Failed(e.to_string()),
        };

        if response.status() != StatusCode::OK {
            return ModelLookup::Unavailable(response.status().as_u16());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return ModelLookup::Failed(e.to_string()),
        };

        match model::parse_models(&body) {
            Ok(models) => ModelLookup::Found(ModelSummary::from_models(&models)),
            Err(e) => ModelLookup::Failed(e.to_string()),
        }
    }
}

/// Walks the candidate ports in order and stops at the first service found.
pub struct Detector<P: Probe> {
    probe: P,
    ports: Vec<u16>,
}

impl<C: ConfigProvider> Detector<HttpProbe<C>> {
    pub fn from_config(config: C) -> Result<Self> {
        let ports = config.ports().to_vec();
        Ok(Self::new(HttpProbe::new(config)?, ports))
    }
}

impl<P: Probe> Detector<P> {
    pub fn new(probe: P, ports: Vec<u16>) -> Self {
        Self { probe, ports }
    }

    /// Never fails: every probe error becomes "try the next port".
    pub async fn detect(&self, sink: &mut dyn ReportSink) -> Option<Detection> {
        for &port in &self.ports {
            let url = self.probe.target_url(port);
            sink.line(&report::testing(&url));

            match self.probe.probe(port).await {
                ProbeResult::Success(detection) => {
                    tracing::info!("Service detected on port {}", port);
                    return Some(self.enrich(detection, sink).await);
                }
                failure => {
                    tracing::debug!("Port {} not usable: {:?}", port, failure);
                    if let Some(line) = report::failure(&url, &failure) {
                        sink.line(&line);
                    }
                }
            }
        }

        tracing::info!("No service found on ports {:?}", self.ports);
        let first_port = self.ports.first().copied().unwrap_or(crate::config::DEFAULT_PORTS[0]);
        report::write_all(sink, &report::not_found(first_port));
        None
    }

    async fn enrich(&self, mut detection: Detection, sink: &mut dyn ReportSink) -> Detection {
        report::write_all(sink, &report::detected(&detection));

        match self.probe.fetch_models(&detection.base_url).await {
            ModelLookup::Found(summary) => {
                report::write_all(sink, &report::models(&summary));
                detection.model_count = Some(summary.count);
                detection.model_name = summary.current;
            }
            ModelLookup::Unavailable(status) => {
                tracing::debug!("Model listing returned HTTP {}", status);
            }
            ModelLookup::Failed(reason) => {
                tracing::debug!("Model listing failed: {}", reason);
                sink.line(&report::models_failed(&reason));
            }
        }

        detection
    }
}
