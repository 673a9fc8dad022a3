pub mod config;
pub mod core;
pub mod domain;
pub mod geo;
pub mod utils;

pub use crate::config::{cli::LocalStorage, scenario::ScenarioConfig, CliConfig};
pub use crate::core::{engine::ToolEngine, pipeline::BufferPipeline};
pub use crate::domain::model::{BufferRing, GeoPoint, ProjectedPoint, RingMode, RunSummary};
pub use crate::domain::ports::{ConfigProvider, MessageSink, Pipeline, Storage};
pub use crate::utils::console::Console;
pub use crate::utils::error::{Result, ToolError};
