use crate::domain::model::{ModelLookup, ProbeResult};
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn ports(&self) -> &[u16];
    fn timeout(&self) -> Duration;
    fn options_path(&self) -> &str;
    fn models_path(&self) -> &str;

    fn base_url(&self, port: u16) -> String {
        format!("http://{}:{}", self.host(), port)
    }
}

/// Non-failing HTTP attempts against a candidate port. Every transport
/// problem is folded into the returned value.
#[async_trait]
pub trait Probe: Send + Sync {
    fn target_url(&self, port: u16) -> String;
    async fn probe(&self, port: u16) -> ProbeResult;
    async fn fetch_models(&self, base_url: &str) -> ModelLookup;
}

/// Destination for the human-readable progress lines.
pub trait ReportSink {
    fn line(&mut self, text: &str);
}

impl ReportSink for Vec<String> {
    fn line(&mut self, text: &str) {
        self.push(text.to_string());
    }
}
