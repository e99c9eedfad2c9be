use crate::utils::error::Result;
use serde::Deserialize;

/// Placeholder shown when the first model entry carries no `title`.
pub const UNKNOWN_MODEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub port: u16,
    pub base_url: String,
    pub model_count: Option<usize>,
    pub model_name: Option<String>,
}

/// Outcome of one probe against a single candidate port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeResult {
    Success(Detection),
    HttpError(u16),
    ConnectionRefused,
    Timeout,
    OtherError(String),
}

/// One element of the `sd-models` listing. Only `title` is read.
#[derive(Debug, Clone, Deserialize)]
pub struct SdModel {
    #[serde(default)]
    pub title: Option<String>,
}

/// Decode an `sd-models` response body.
pub fn parse_models(body: &str) -> Result<Vec<SdModel>> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub count: usize,
    pub current: Option<String>,
}

impl ModelSummary {
    pub fn from_models(models: &[SdModel]) -> Self {
        let current = models.first().map(|model| {
            model
                .title
                .clone()
                .unwrap_or_else(|| UNKNOWN_MODEL.to_string())
        });

        Self {
            count: models.len(),
            current,
        }
    }
}

/// Result of the secondary models lookup after a successful probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelLookup {
    Found(ModelSummary),
    /// The endpoint answered with a non-200 status; nothing is reported.
    Unavailable(u16),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::DetectError;

    #[test]
    fn test_summary_uses_first_title() {
        let models: Vec<SdModel> = serde_json::from_value(serde_json::json!([
            {"title": "sd_v1.5", "model_name": "v1-5-pruned"},
            {"title": "sdxl_base"}
        ]))
        .unwrap();

        let summary = ModelSummary::from_models(&models);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.current.as_deref(), Some("sd_v1.5"));
    }

    #[test]
    fn test_summary_falls_back_when_title_missing() {
        let models: Vec<SdModel> =
            serde_json::from_value(serde_json::json!([{"model_name": "anon"}])).unwrap();

        let summary = ModelSummary::from_models(&models);
        assert_eq!(summary.count, 1);
        assert_eq!(summary.current.as_deref(), Some(UNKNOWN_MODEL));
    }

    #[test]
    fn test_null_title_uses_placeholder() {
        let models = parse_models(r#"[{"title": null, "model_name": "anon"}]"#).unwrap();

        let summary = ModelSummary::from_models(&models);
        assert_eq!(summary.current.as_deref(), Some(UNKNOWN_MODEL));
    }

    #[test]
    fn test_parse_models_rejects_non_array() {
        let err = parse_models(r#"{"title": "sd_v1.5"}"#).unwrap_err();
        assert!(matches!(err, DetectError::SerializationError(_)));

        assert!(parse_models("not json").is_err());
    }

    #[test]
    fn test_summary_of_empty_listing() {
        let summary = ModelSummary::from_models(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.current, None);
    }
}
