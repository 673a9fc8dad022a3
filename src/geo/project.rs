use proj4rs::transform::transform;

use crate::domain::model::{GeoPoint, ProjectedPoint};
use crate::geo::srs::SpatialRef;
use crate::utils::error::{Result, ToolError};

/// Reproject a geographic point into the target spatial reference.
///
/// The projection engine exchanges geographic coordinates in radians and
/// projected coordinates in CRS units, so degrees are converted on the way in
/// and, for geographic targets, back on the way out.
pub fn project_point(
    point: &GeoPoint,
    from: &SpatialRef,
    to: &SpatialRef,
) -> Result<ProjectedPoint> {
    if !from.is_geographic() {
        return Err(ToolError::SpatialRefError {
            definition: from.definition().to_string(),
            reason: "source spatial reference must be geographic".to_string(),
        });
    }

    let mut coords = (
        point.longitude.to_radians(),
        point.latitude.to_radians(),
        0.0,
    );
    transform(from.proj(), to.proj(), &mut coords)?;

    let (mut x, mut y) = (coords.0, coords.1);
    if to.is_geographic() {
        x = x.to_degrees();
        y = y.to_degrees();
    }
    Ok(ProjectedPoint { x, y })
}
