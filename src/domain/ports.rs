use crate::domain::model::{BufferOutcome, ProjectedPoint, ProjectionOutcome, RingMode};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn latitude(&self) -> f64;
    fn longitude(&self) -> f64;
    fn output_path(&self) -> &str;
    fn point_output(&self) -> &str;
    fn buffer_output(&self) -> &str;
    fn distances(&self) -> &[f64];
    fn units(&self) -> &str;
    fn ring_mode(&self) -> RingMode;
    fn field_name(&self) -> &str;
    fn segments(&self) -> u32;
    fn target_srs(&self) -> Option<&str>;
}

/// Sink for the host console: timestamped status lines and error lines.
pub trait MessageSink: Send + Sync {
    fn message(&self, text: &str);
    fn error(&self, text: &str);
}

pub trait Pipeline: Send + Sync {
    fn project(&self) -> Result<ProjectionOutcome>;
    fn buffer(&self, point: &ProjectedPoint) -> Result<BufferOutcome>;
}
