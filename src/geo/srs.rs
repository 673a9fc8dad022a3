use proj4rs::proj::Proj;

use crate::utils::error::{Result, ToolError};

/// WGS 1984 geographic coordinate system (EPSG:4326).
pub const WGS84: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// NAD83 Pennsylvania State Plane South, US survey feet (EPSG:2272).
pub const PA_STATE_PLANE_SOUTH: &str = "+proj=lcc +lat_1=40.96666666666667 \
+lat_2=39.93333333333333 +lat_0=39.33333333333333 +lon_0=-77.75 \
+x_0=600000.0000000001 +y_0=0 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 \
+to_meter=0.3048006096012192 +no_defs";

/// A parsed spatial reference wrapping the projection engine's definition.
pub struct SpatialRef {
    proj: Proj,
    definition: String,
    geographic: bool,
    to_meter: f64,
}

impl std::fmt::Debug for SpatialRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialRef")
            .field("definition", &self.definition)
            .field("geographic", &self.geographic)
            .field("to_meter", &self.to_meter)
            .finish()
    }
}

impl SpatialRef {
    pub fn from_proj_string(definition: &str) -> Result<Self> {
        let proj =
            Proj::from_proj_string(definition).map_err(|e| ToolError::SpatialRefError {
                definition: definition.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            geographic: is_geographic(definition),
            to_meter: unit_factor(definition),
            definition: definition.to_string(),
            proj,
        })
    }

    pub fn wgs84() -> Result<Self> {
        Self::from_proj_string(WGS84)
    }

    pub fn pa_state_plane_south() -> Result<Self> {
        Self::from_proj_string(PA_STATE_PLANE_SOUTH)
    }

    pub fn proj(&self) -> &Proj {
        &self.proj
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// True for latitude/longitude systems, whose coordinates the engine
    /// exchanges in radians.
    pub fn is_geographic(&self) -> bool {
        self.geographic
    }

    /// Size of one CRS unit in meters (1.0 for metric systems).
    pub fn unit_to_meter(&self) -> f64 {
        self.to_meter
    }
}

fn is_geographic(definition: &str) -> bool {
    definition
        .split_whitespace()
        .any(|token| token == "+proj=longlat" || token == "+proj=latlong")
}

fn unit_factor(definition: &str) -> f64 {
    for token in definition.split_whitespace() {
        if let Some(value) = token.strip_prefix("+to_meter=") {
            if let Ok(factor) = value.parse::<f64>() {
                return factor;
            }
        }
        if let Some(unit) = token.strip_prefix("+units=") {
            return match unit {
                "km" => 1000.0,
                "ft" => 0.3048,
                "us-ft" => 0.304_800_609_601_219_2,
                "yd" => 0.9144,
                "mi" => 1609.344,
                _ => 1.0,
            };
        }
    }
    1.0
}
