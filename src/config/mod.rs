pub mod cli;
pub mod scenario;

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::domain::model::RingMode;
use crate::domain::ports::ConfigProvider;
use crate::geo::rings::{MAX_SEGMENTS, MIN_SEGMENTS};
use crate::geo::units::BufferUnit;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "multiring")]
#[command(about = "Project a WGS 1984 point and build multi-ring buffers around it")]
pub struct CliConfig {
    /// Latitude of the site, decimal degrees (WGS 1984)
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: f64,

    /// Longitude of the site, decimal degrees (WGS 1984)
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: f64,

    /// Directory receiving the output artifacts
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// File name of the projected point artifact
    #[arg(long, default_value = "point_spc.geojson")]
    pub point_output: String,

    /// Buffer distances, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub distances: Vec<f64>,

    /// Distance unit for the buffer rings
    #[arg(long, default_value = "feet")]
    pub units: String,

    /// File name of the buffer ring artifact
    #[arg(long, default_value = "point_buffers.geojson")]
    pub buffer_output: String,

    /// Keep only the area outside the previous ring (annuli instead of disks)
    #[arg(long)]
    pub outside_only: bool,

    /// Attribute field holding each ring's distance
    #[arg(long, default_value = "distance")]
    pub field_name: String,

    /// Vertices per ring circle
    #[arg(long, default_value = "64")]
    pub segments: u32,

    /// Override the target spatial reference (proj4 string); defaults to
    /// NAD83 Pennsylvania State Plane South, US survey feet
    #[arg(long)]
    pub target_srs: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn latitude(&self) -> f64 {
        self.latitude
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn point_output(&self) -> &str {
        &self.point_output
    }

    fn buffer_output(&self) -> &str {
        &self.buffer_output
    }

    fn distances(&self) -> &[f64] {
        &self.distances
    }

    fn units(&self) -> &str {
        &self.units
    }

    fn ring_mode(&self) -> RingMode {
        if self.outside_only {
            RingMode::Shells
        } else {
            RingMode::Disks
        }
    }

    fn field_name(&self) -> &str {
        &self.field_name
    }

    fn segments(&self) -> u32 {
        self.segments
    }

    fn target_srs(&self) -> Option<&str> {
        self.target_srs.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_latitude("latitude", self.latitude)?;
        validation::validate_longitude("longitude", self.longitude)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_path("point_output", &self.point_output)?;
        validation::validate_path("buffer_output", &self.buffer_output)?;
        validation::validate_distances("distances", &self.distances)?;
        validation::validate_non_empty_string("field_name", &self.field_name)?;
        validation::validate_range("segments", self.segments, MIN_SEGMENTS, MAX_SEGMENTS)?;
        self.units.parse::<BufferUnit>()?;
        if let Some(srs) = &self.target_srs {
            validation::validate_non_empty_string("target_srs", srs)?;
        }
        Ok(())
    }
}
