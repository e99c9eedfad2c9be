pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::ProbeSettings;
pub use crate::core::detector::{Detector, HttpProbe};
pub use crate::core::report::ConsoleSink;
pub use crate::domain::model::{Detection, ProbeResult};
pub use crate::utils::error::{DetectError, Result};
