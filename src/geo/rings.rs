use std::f64::consts::TAU;

use geo_types::{Coord, LineString, Polygon};

use crate::domain::model::{ProjectedPoint, RingMode};
use crate::utils::error::{Result, ToolError};

/// Smallest circle approximation density the tool accepts.
pub const MIN_SEGMENTS: u32 = 8;

/// Largest accepted density; beyond this the artifacts get large without
/// visible benefit.
pub const MAX_SEGMENTS: u32 = 720;

fn circle(center: &ProjectedPoint, radius: f64, segments: u32, clockwise: bool) -> LineString<f64> {
    let mut coords = Vec::with_capacity(segments as usize + 1);
    for i in 0..segments {
        let mut theta = TAU * f64::from(i) / f64::from(segments);
        if clockwise {
            theta = -theta;
        }
        coords.push(Coord {
            x: center.x + radius * theta.cos(),
            y: center.y + radius * theta.sin(),
        });
    }
    coords.push(coords[0]);
    LineString::from(coords)
}

/// Generate one polygon per radius around `center`.
///
/// Radii must be finite, positive and strictly ascending. `Disks` produces a
/// full disk per radius; `Shells` punches the previous disk out of every ring
/// past the innermost, leaving annuli. Exterior rings wind counterclockwise,
/// holes clockwise.
pub fn multi_ring(
    center: &ProjectedPoint,
    radii: &[f64],
    segments: u32,
    mode: RingMode,
) -> Result<Vec<Polygon<f64>>> {
    if radii.is_empty() {
        return Err(ToolError::BufferError {
            message: "no buffer radii supplied".to_string(),
        });
    }
    if !(MIN_SEGMENTS..=MAX_SEGMENTS).contains(&segments) {
        return Err(ToolError::BufferError {
            message: format!(
                "segments must be between {} and {}, got {}",
                MIN_SEGMENTS, MAX_SEGMENTS, segments
            ),
        });
    }
    if !radii.iter().all(|r| r.is_finite()) || radii[0] <= 0.0 {
        return Err(ToolError::BufferError {
            message: "radii must be finite and greater than zero".to_string(),
        });
    }
    for pair in radii.windows(2) {
        if pair[1] <= pair[0] {
            return Err(ToolError::BufferError {
                message: format!(
                    "radii must be strictly ascending, got {} after {}",
                    pair[1], pair[0]
                ),
            });
        }
    }

    let polygons = radii
        .iter()
        .enumerate()
        .map(|(i, &radius)| {
            let exterior = circle(center, radius, segments, false);
            let interiors = match mode {
                RingMode::Disks => vec![],
                RingMode::Shells if i == 0 => vec![],
                RingMode::Shells => vec![circle(center, radii[i - 1], segments, true)],
            };
            Polygon::new(exterior, interiors)
        })
        .collect();

    Ok(polygons)
}
