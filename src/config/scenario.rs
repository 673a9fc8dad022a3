use std::fs;

use serde::{Deserialize, Serialize};

use crate::domain::model::RingMode;
use crate::domain::ports::ConfigProvider;
use crate::geo::rings::{MAX_SEGMENTS, MIN_SEGMENTS};
use crate::geo::units::BufferUnit;
use crate::utils::error::{Result, ToolError};
use crate::utils::validation::{self, Validate};

/// A complete tool run described as a TOML file, so a parameter set can be
/// kept alongside the data it was produced from and replayed later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub tool: Option<ToolSection>,
    pub site: SiteSection,
    #[serde(default)]
    pub projection: ProjectionSection,
    pub rings: RingsSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSection {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectionSection {
    /// File name of the projected point artifact
    pub output: Option<String>,
    /// proj4 string overriding the default target spatial reference
    pub target_srs: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingsSection {
    pub distances: Vec<f64>,
    pub units: String,
    pub outside_only: Option<bool>,
    pub field_name: Option<String>,
    pub segments: Option<u32>,
    /// File name of the buffer ring artifact
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSection {
    pub path: Option<String>,
}

impl ScenarioConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ToolError::ConfigError {
            message: format!("failed to parse scenario file '{}': {}", path, e),
        })
    }
}

impl ConfigProvider for ScenarioConfig {
    fn latitude(&self) -> f64 {
        self.site.latitude
    }

    fn longitude(&self) -> f64 {
        self.site.longitude
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or("./output")
    }

    fn point_output(&self) -> &str {
        self.projection.output.as_deref().unwrap_or("point_spc.geojson")
    }

    fn buffer_output(&self) -> &str {
        self.rings.output.as_deref().unwrap_or("point_buffers.geojson")
    }

    fn distances(&self) -> &[f64] {
        &self.rings.distances
    }

    fn units(&self) -> &str {
        &self.rings.units
    }

    fn ring_mode(&self) -> RingMode {
        if self.rings.outside_only.unwrap_or(false) {
            RingMode::Shells
        } else {
            RingMode::Disks
        }
    }

    fn field_name(&self) -> &str {
        self.rings.field_name.as_deref().unwrap_or("distance")
    }

    fn segments(&self) -> u32 {
        self.rings.segments.unwrap_or(64)
    }

    fn target_srs(&self) -> Option<&str> {
        self.projection.target_srs.as_deref()
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_latitude("site.latitude", self.site.latitude)?;
        validation::validate_longitude("site.longitude", self.site.longitude)?;
        validation::validate_path("output.path", self.output_path())?;
        validation::validate_path("projection.output", self.point_output())?;
        validation::validate_path("rings.output", self.buffer_output())?;
        validation::validate_distances("rings.distances", &self.rings.distances)?;
        validation::validate_non_empty_string("rings.field_name", self.field_name())?;
        validation::validate_range("rings.segments", self.segments(), MIN_SEGMENTS, MAX_SEGMENTS)?;
        self.rings.units.parse::<BufferUnit>()?;
        if let Some(srs) = self.target_srs() {
            validation::validate_non_empty_string("projection.target_srs", srs)?;
        }
        Ok(())
    }
}
