pub mod detector;
pub mod report;

pub use crate::domain::model::{Detection, ModelLookup, ProbeResult};
pub use crate::domain::ports::{ConfigProvider, Probe, ReportSink};
pub use crate::utils::error::Result;
