use crate::domain::model::{Detection, ModelSummary, ProbeResult};
use crate::domain::ports::ReportSink;

pub const INSTALL_URL: &str = "https://github.com/AUTOMATIC1111/stable-diffusion-webui";

/// Writes report lines straight to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn line(&mut self, text: &str) {
        println!("{}", text);
    }
}

pub fn banner() -> Vec<String> {
    vec![
        "🔍 Testing Automatic1111 detection...".to_string(),
        "=".repeat(40),
    ]
}

pub fn testing(url: &str) -> String {
    format!("Testing {}...", url)
}

pub fn detected(detection: &Detection) -> Vec<String> {
    vec![
        format!("✅ Automatic1111 detected at {}", detection.base_url),
        "   Status: 200".to_string(),
    ]
}

pub fn models(summary: &ModelSummary) -> Vec<String> {
    let mut lines = vec![format!("   Available models: {}", summary.count)];
    if let Some(current) = &summary.current {
        lines.push(format!("   Current model: {}", current));
    }
    lines
}

pub fn models_failed(reason: &str) -> String {
    format!("   Could not fetch models: {}", reason)
}

/// `None` for a success; successes are reported through [`detected`].
pub fn failure(url: &str, result: &ProbeResult) -> Option<String> {
    match result {
        ProbeResult::Success(_) => None,
        ProbeResult::HttpError(status) => Some(format!("❌ HTTP {} at {}", status, url)),
        ProbeResult::ConnectionRefused => Some(format!("❌ Connection refused at {}", url)),
        ProbeResult::Timeout => Some(format!("❌ Timeout at {}", url)),
        ProbeResult::OtherError(message) => Some(format!("❌ Error at {}: {}", url, message)),
    }
}

pub fn ready(base_url: &str) -> Vec<String> {
    vec![
        String::new(),
        format!("🎉 Automatic1111 is ready at: {}", base_url),
        "Open WebUI will automatically detect and configure it!".to_string(),
    ]
}

pub fn not_found(first_port: u16) -> Vec<String> {
    vec![
        String::new(),
        "❌ No Automatic1111 instance detected".to_string(),
        String::new(),
        "To start Automatic1111:".to_string(),
        format!("1. Install Automatic1111: {}", INSTALL_URL),
        format!(
            "2. Run with API enabled: python webui.py --api --listen --port {}",
            first_port
        ),
        format!(
            "3. Or use Docker: docker run -d -p {}:7860 ghcr.io/neggles/sd-webui-docker:latest",
            first_port
        ),
    ]
}

pub fn write_all(sink: &mut dyn ReportSink, lines: &[String]) {
    for line in lines {
        sink.line(line);
    }
}
