use std::io::Write;

use approx::assert_relative_eq;
use plane_aero::{config::ConfigError, AircraftAeroConfig};
use pretty_assertions::assert_eq;

fn write_config(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp config");
    file.write_all(contents.as_bytes()).expect("write temp config");
    file
}

#[test]
fn test_yaml_file_round_trip() {
    let trainer = AircraftAeroConfig::trainer();
    let file = write_config(".yaml", &trainer.to_yaml_string().unwrap());

    let loaded = AircraftAeroConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded, trainer);
}

#[test]
fn test_json_file() {
    let mut trainer = AircraftAeroConfig::trainer();
    trainer.name = "json-trainer".to_string();
    trainer.aero.rudder_power = 0.75;
    let file = write_config(".json", &serde_json::to_string_pretty(&trainer).unwrap());

    let loaded = AircraftAeroConfig::from_file(file.path()).unwrap();
    assert_eq!(loaded.name, "json-trainer");
    assert_relative_eq!(loaded.aero.rudder_power, 0.75);
}

#[test]
fn test_unknown_extension_is_rejected() {
    let file = write_config(".toml", "name = 'nope'");
    assert!(matches!(
        AircraftAeroConfig::from_file(file.path()),
        Err(ConfigError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    assert!(matches!(
        AircraftAeroConfig::from_file("/definitely/not/here.yaml"),
        Err(ConfigError::FileError(_))
    ));
}
