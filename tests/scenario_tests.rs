use approx::assert_relative_eq;
use geojson::{GeoJson, Value};
use multiring::config::scenario::ScenarioConfig;
use multiring::utils::validation::Validate;
use multiring::{BufferPipeline, ConfigProvider, Console, LocalStorage, ToolEngine, ToolError};
use tempfile::TempDir;

fn write_scenario(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("scenario.toml");
    std::fs::write(&path, contents).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn scenario_file_drives_a_full_run() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("runs");
    let scenario = format!(
        r#"
            [tool]
            name = "carlisle-rings"
            description = "Mile rings around the Carlisle square"

            [site]
            latitude = 40.2010
            longitude = -77.1894

            [rings]
            distances = [1.0, 2.0]
            units = "miles"

            [output]
            path = "{}"
        "#,
        output_path.to_str().unwrap()
    );
    let scenario_path = write_scenario(&temp_dir, &scenario);

    let config = ScenarioConfig::from_file(&scenario_path).unwrap();
    config.validate().unwrap();

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BufferPipeline::new(storage, config, Console::new());
    let engine = ToolEngine::new(pipeline, Console::new());

    let summary = engine.run().unwrap();
    assert_eq!(summary.ring_count, 2);

    let raw = std::fs::read_to_string(output_path.join("point_buffers.geojson")).unwrap();
    let collection = match raw.parse::<GeoJson>().unwrap() {
        GeoJson::FeatureCollection(collection) => collection,
        other => panic!("expected a feature collection, got {:?}", other),
    };
    assert_eq!(collection.features.len(), 2);

    // one US mile expressed in US survey feet
    let mile_in_survey_feet = 1609.344 / 0.3048006096012192;
    let feature = &collection.features[0];
    let properties = feature.properties.as_ref().unwrap();
    assert_relative_eq!(properties["distance"].as_f64().unwrap(), 1.0);
    assert_eq!(properties["units"].as_str().unwrap(), "Miles");

    let point_raw = std::fs::read_to_string(output_path.join("point_spc.geojson")).unwrap();
    let point_collection = match point_raw.parse::<GeoJson>().unwrap() {
        GeoJson::FeatureCollection(collection) => collection,
        other => panic!("expected a feature collection, got {:?}", other),
    };
    let (x, y) = match &point_collection.features[0].geometry.as_ref().unwrap().value {
        Value::Point(position) => (position[0], position[1]),
        other => panic!("expected a point geometry, got {:?}", other),
    };

    match &feature.geometry.as_ref().unwrap().value {
        Value::Polygon(rings) => {
            for position in &rings[0] {
                let radius = ((position[0] - x).powi(2) + (position[1] - y).powi(2)).sqrt();
                assert_relative_eq!(radius, mile_in_survey_feet, epsilon = 0.1);
            }
        }
        other => panic!("expected a polygon geometry, got {:?}", other),
    }
}

#[test]
fn malformed_scenario_reports_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let scenario_path = write_scenario(&temp_dir, "latitude = ][");

    let err = ScenarioConfig::from_file(&scenario_path).unwrap_err();
    assert!(matches!(err, ToolError::ConfigError { .. }));
}

#[test]
fn non_numeric_latitude_reports_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let scenario_path = write_scenario(
        &temp_dir,
        r#"
            [site]
            latitude = "forty"
            longitude = -77.0

            [rings]
            distances = [500.0]
            units = "feet"
        "#,
    );

    let err = ScenarioConfig::from_file(&scenario_path).unwrap_err();
    assert!(matches!(err, ToolError::ConfigError { .. }));
}

#[test]
fn missing_scenario_file_reports_an_io_error() {
    let err = ScenarioConfig::from_file("/nonexistent/scenario.toml").unwrap_err();
    assert!(matches!(err, ToolError::IoError(_)));
}
