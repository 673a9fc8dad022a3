use geo_types::Point;
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, JsonValue, Value};

use crate::core::{
    BufferOutcome, BufferRing, ConfigProvider, GeoPoint, MessageSink, Pipeline, ProjectedPoint,
    ProjectionOutcome, Result, StepReport, Storage,
};
use crate::geo::project::project_point;
use crate::geo::rings::multi_ring;
use crate::geo::srs::SpatialRef;
use crate::geo::units::BufferUnit;

pub struct BufferPipeline<S: Storage, C: ConfigProvider, M: MessageSink> {
    storage: S,
    config: C,
    reporter: M,
}

impl<S: Storage, C: ConfigProvider, M: MessageSink> BufferPipeline<S, C, M> {
    pub fn new(storage: S, config: C, reporter: M) -> Self {
        Self {
            storage,
            config,
            reporter,
        }
    }

    fn target_srs(&self) -> Result<SpatialRef> {
        match self.config.target_srs() {
            Some(definition) => SpatialRef::from_proj_string(definition),
            None => SpatialRef::pa_state_plane_south(),
        }
    }

    // The artifacts carry projected coordinates, so the collection records its
    // CRS as a foreign member instead of claiming RFC 7946 WGS84.
    fn crs_member(srs: &SpatialRef) -> JsonObject {
        let mut crs = JsonObject::new();
        crs.insert("type".to_string(), JsonValue::from("proj4"));
        crs.insert(
            "properties".to_string(),
            serde_json::json!({ "definition": srs.definition() }),
        );

        let mut members = JsonObject::new();
        members.insert("crs".to_string(), JsonValue::Object(crs));
        members
    }

    fn write_collection(&self, name: &str, collection: &FeatureCollection) -> Result<String> {
        let payload = serde_json::to_vec_pretty(collection)?;
        tracing::debug!("Writing {} bytes to {}", payload.len(), name);
        self.storage.write_file(name, &payload)?;
        Ok(format!("{}/{}", self.config.output_path(), name))
    }
}

impl<S: Storage, C: ConfigProvider, M: MessageSink> Pipeline for BufferPipeline<S, C, M> {
    fn project(&self) -> Result<ProjectionOutcome> {
        let site = GeoPoint {
            latitude: self.config.latitude(),
            longitude: self.config.longitude(),
        };
        self.reporter.message(&format!(
            "Created WGS 1984 point for latitude: {} and longitude: {}.",
            site.latitude, site.longitude
        ));

        let source = SpatialRef::wgs84()?;
        let target = self.target_srs()?;
        let projected = project_point(&site, &source, &target)?;
        tracing::debug!("Projected coordinates: x={}, y={}", projected.x, projected.y);

        let mut properties = JsonObject::new();
        properties.insert("latitude".to_string(), site.latitude.into());
        properties.insert("longitude".to_string(), site.longitude.into());

        let feature = Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::from(&Point::new(
                projected.x,
                projected.y,
            )))),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        };
        let collection = FeatureCollection {
            bbox: None,
            features: vec![feature],
            foreign_members: Some(Self::crs_member(&target)),
        };
        let artifact = self.write_collection(self.config.point_output(), &collection)?;

        Ok(ProjectionOutcome {
            point: projected,
            report: StepReport {
                messages: vec![
                    format!("Projected 1 point feature to {}", artifact),
                    "Reprojected point from WGS 1984 to the target spatial reference."
                        .to_string(),
                ],
                artifact,
            },
        })
    }

    fn buffer(&self, point: &ProjectedPoint) -> Result<BufferOutcome> {
        let unit: BufferUnit = self.config.units().parse()?;
        let target = self.target_srs()?;

        let mut distances: Vec<f64> = self.config.distances().to_vec();
        distances.sort_by(|a, b| a.total_cmp(b));
        distances.dedup();
        if distances.len() < self.config.distances().len() {
            tracing::warn!("Dropped duplicate buffer distances");
        }

        let radii: Vec<f64> = distances
            .iter()
            .map(|&d| unit.to_meters(d) / target.unit_to_meter())
            .collect();
        let polygons = multi_ring(
            point,
            &radii,
            self.config.segments(),
            self.config.ring_mode(),
        )?;

        let rings: Vec<BufferRing> = distances
            .iter()
            .zip(radii.iter())
            .zip(polygons)
            .map(|((&distance, &radius), polygon)| BufferRing {
                distance,
                radius,
                polygon,
            })
            .collect();
        for ring in &rings {
            tracing::debug!(
                "Ring at {} {} -> radius {} CRS units",
                ring.distance,
                unit,
                ring.radius
            );
        }

        let features = rings
            .iter()
            .enumerate()
            .map(|(index, ring)| {
                let mut properties = JsonObject::new();
                properties.insert(self.config.field_name().to_string(), ring.distance.into());
                properties.insert("ring".to_string(), JsonValue::from(index as u64 + 1));
                properties.insert("units".to_string(), JsonValue::from(unit.to_string()));
                Feature {
                    bbox: None,
                    geometry: Some(Geometry::new(Value::from(&ring.polygon))),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(Self::crs_member(&target)),
        };
        let artifact = self.write_collection(self.config.buffer_output(), &collection)?;

        self.reporter.message(&format!(
            "Created buffer(s) around location latitude: {}; longitude: {}.",
            self.config.latitude(),
            self.config.longitude()
        ));

        Ok(BufferOutcome {
            ring_count: rings.len(),
            report: StepReport {
                messages: vec![format!("Wrote {} buffer ring(s) to {}", rings.len(), artifact)],
                artifact,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use approx::assert_relative_eq;
    use geojson::GeoJson;

    use crate::domain::model::RingMode;
    use crate::utils::error::ToolError;

    #[derive(Clone, Default)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ToolError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct SilentSink;

    impl MessageSink for SilentSink {
        fn message(&self, _text: &str) {}
        fn error(&self, _text: &str) {}
    }

    struct MockConfig {
        latitude: f64,
        longitude: f64,
        distances: Vec<f64>,
        units: String,
        outside_only: bool,
        target_srs: Option<String>,
    }

    impl Default for MockConfig {
        fn default() -> Self {
            Self {
                latitude: 40.2010,
                longitude: -77.1894,
                distances: vec![1000.0, 2000.0],
                units: "feet".to_string(),
                outside_only: false,
                target_srs: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn latitude(&self) -> f64 {
            self.latitude
        }
        fn longitude(&self) -> f64 {
            self.longitude
        }
        fn output_path(&self) -> &str {
            "test_output"
        }
        fn point_output(&self) -> &str {
            "point_spc.geojson"
        }
        fn buffer_output(&self) -> &str {
            "point_buffers.geojson"
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
            "distance"
        }
        fn segments(&self) -> u32 {
            64
        }
        fn target_srs(&self) -> Option<&str> {
            self.target_srs.as_deref()
        }
    }

    fn parse_collection(bytes: &[u8]) -> FeatureCollection {
        let geojson: GeoJson = std::str::from_utf8(bytes).unwrap().parse().unwrap();
        match geojson {
            GeoJson::FeatureCollection(collection) => collection,
            other => panic!("expected a feature collection, got {:?}", other),
        }
    }

    #[test]
    fn project_writes_the_point_artifact() {
        let storage = MockStorage::default();
        let pipeline = BufferPipeline::new(storage.clone(), MockConfig::default(), SilentSink);

        let outcome = pipeline.project().unwrap();

        assert_eq!(outcome.report.artifact, "test_output/point_spc.geojson");
        let collection = parse_collection(&storage.get_file("point_spc.geojson").unwrap());
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        let properties = feature.properties.as_ref().unwrap();
        assert_relative_eq!(properties["latitude"].as_f64().unwrap(), 40.2010);
        assert_relative_eq!(properties["longitude"].as_f64().unwrap(), -77.1894);

        match &feature.geometry.as_ref().unwrap().value {
            Value::Point(position) => {
                assert_relative_eq!(position[0], outcome.point.x, epsilon = 1e-9);
                assert_relative_eq!(position[1], outcome.point.y, epsilon = 1e-9);
            }
            other => panic!("expected a point geometry, got {:?}", other),
        }

        assert!(collection.foreign_members.unwrap().contains_key("crs"));
    }

    #[test]
    fn project_rejects_a_bad_target_srs() {
        let storage = MockStorage::default();
        let config = MockConfig {
            target_srs: Some("definitely not proj4".to_string()),
            ..MockConfig::default()
        };
        let pipeline = BufferPipeline::new(storage.clone(), config, SilentSink);

        let err = pipeline.project().unwrap_err();
        assert!(matches!(err, ToolError::SpatialRefError { .. }));
        assert!(storage.get_file("point_spc.geojson").is_none());
    }

    #[test]
    fn buffer_writes_one_feature_per_distance() {
        let storage = MockStorage::default();
        let pipeline = BufferPipeline::new(storage.clone(), MockConfig::default(), SilentSink);
        let center = ProjectedPoint {
            x: 2_000_000.0,
            y: 250_000.0,
        };

        let outcome = pipeline.buffer(&center).unwrap();
        assert_eq!(outcome.ring_count, 2);

        let collection = parse_collection(&storage.get_file("point_buffers.geojson").unwrap());
        assert_eq!(collection.features.len(), 2);

        for (feature, expected) in collection.features.iter().zip([1000.0, 2000.0]) {
            let properties = feature.properties.as_ref().unwrap();
            assert_relative_eq!(properties["distance"].as_f64().unwrap(), expected);
            assert_eq!(properties["units"].as_str().unwrap(), "Feet");

            // 1000 international feet expressed in US survey feet
            let expected_radius = expected * 0.3048 / 0.3048006096012192;
            match &feature.geometry.as_ref().unwrap().value {
                Value::Polygon(rings) => {
                    for position in &rings[0] {
                        let radius = ((position[0] - center.x).powi(2)
                            + (position[1] - center.y).powi(2))
                        .sqrt();
                        assert_relative_eq!(radius, expected_radius, epsilon = 1e-6);
                    }
                }
                other => panic!("expected a polygon geometry, got {:?}", other),
            }
        }
    }

    #[test]
    fn buffer_sorts_and_dedups_distances() {
        let storage = MockStorage::default();
        let config = MockConfig {
            distances: vec![3000.0, 1000.0, 1000.0, 2000.0],
            ..MockConfig::default()
        };
        let pipeline = BufferPipeline::new(storage.clone(), config, SilentSink);

        let outcome = pipeline
            .buffer(&ProjectedPoint { x: 0.0, y: 0.0 })
            .unwrap();
        assert_eq!(outcome.ring_count, 3);

        let collection = parse_collection(&storage.get_file("point_buffers.geojson").unwrap());
        let distances: Vec<f64> = collection
            .features
            .iter()
            .map(|f| f.properties.as_ref().unwrap()["distance"].as_f64().unwrap())
            .collect();
        assert_eq!(distances, vec![1000.0, 2000.0, 3000.0]);
    }

    #[test]
    fn buffer_shells_have_holes() {
        let storage = MockStorage::default();
        let config = MockConfig {
            outside_only: true,
            ..MockConfig::default()
        };
        let pipeline = BufferPipeline::new(storage.clone(), config, SilentSink);

        pipeline
            .buffer(&ProjectedPoint { x: 0.0, y: 0.0 })
            .unwrap();

        let collection = parse_collection(&storage.get_file("point_buffers.geojson").unwrap());
        let ring_counts: Vec<usize> = collection
            .features
            .iter()
            .map(|f| match &f.geometry.as_ref().unwrap().value {
                Value::Polygon(rings) => rings.len(),
                other => panic!("expected a polygon geometry, got {:?}", other),
            })
            .collect();
        assert_eq!(ring_counts, vec![1, 2]);
    }

    #[test]
    fn buffer_rejects_an_unknown_unit() {
        let storage = MockStorage::default();
        let config = MockConfig {
            units: "leagues".to_string(),
            ..MockConfig::default()
        };
        let pipeline = BufferPipeline::new(storage.clone(), config, SilentSink);

        let err = pipeline
            .buffer(&ProjectedPoint { x: 0.0, y: 0.0 })
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidConfigValueError { .. }));
        assert!(storage.get_file("point_buffers.geojson").is_none());
    }
}
