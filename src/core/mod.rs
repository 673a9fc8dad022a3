pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{
    BufferOutcome, BufferRing, GeoPoint, ProjectedPoint, ProjectionOutcome, RingMode, RunSummary,
    StepReport,
};
pub use crate::domain::ports::{ConfigProvider, MessageSink, Pipeline, Storage};
pub use crate::utils::error::Result;
