use crate::utils::error::{DetectError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(DetectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// The URL built for `host`/`port` must still address that host and port.
pub fn validate_host_port(field_name: &str, host: &str, port: u16) -> Result<()> {
    let url_str = format!("http://{}:{}", host, port);
    validate_url(field_name, &url_str)?;

    let url = Url::parse(&url_str).map_err(|e| DetectError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: host.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })?;

    let same_host = url
        .host_str()
        .is_some_and(|parsed| parsed.eq_ignore_ascii_case(host));
    if !same_host || url.port_or_known_default() != Some(port) {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: host.to_string(),
            reason: format!("Host does not form a valid URL with port {}", port),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Endpoint paths are appended verbatim to the base URL.
pub fn validate_endpoint_path(field_name: &str, path: &str) -> Result<()> {
    if !path.starts_with('/') {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must start with '/'".to_string(),
        });
    }
    Ok(())
}

pub fn validate_ports(field_name: &str, ports: &[u16]) -> Result<()> {
    if ports.is_empty() {
        return Err(DetectError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for &port in ports {
        if port == 0 {
            return Err(DetectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: port.to_string(),
                reason: "Port must be between 1 and 65535".to_string(),
            });
        }
        if !seen.insert(port) {
            return Err(DetectError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: port.to_string(),
                reason: "Port is listed more than once".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DetectError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}
