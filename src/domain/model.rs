use geo_types::Polygon;
use serde::{Deserialize, Serialize};

/// Geographic point in WGS 1984, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Point expressed in the units of the target projected coordinate system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

/// Shape of the generated ring polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingMode {
    /// Every ring is a full disk out to its distance.
    #[default]
    Disks,
    /// Every ring past the innermost excludes the previous disk (annuli).
    Shells,
}

/// One generated buffer ring.
#[derive(Debug, Clone)]
pub struct BufferRing {
    /// Distance as supplied by the user, in the requested unit.
    pub distance: f64,
    /// Ring radius converted to target CRS units.
    pub radius: f64,
    pub polygon: Polygon<f64>,
}

/// Artifact path and status messages produced by one geoprocessing step.
#[derive(Debug, Clone, Default)]
pub struct StepReport {
    pub artifact: String,
    pub messages: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProjectionOutcome {
    pub point: ProjectedPoint,
    pub report: StepReport,
}

#[derive(Debug, Clone)]
pub struct BufferOutcome {
    pub ring_count: usize,
    pub report: StepReport,
}

/// Summary returned by a completed engine run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub point_artifact: String,
    pub buffer_artifact: String,
    pub ring_count: usize,
}
