use scatterview::{load_config_from_path, save_config_to_path, AxisScale, Error, ScatterConfig};

fn custom() -> ScatterConfig {
    ScatterConfig {
        title: "Volcano".to_string(),
        search_columns: Some(vec!["alias".to_string()]),
        table_columns: vec!["alias".to_string(), "description".to_string()],
        padding: 0.1,
        scale: AxisScale::Log,
        ..Default::default()
    }
}

#[test]
fn json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scatter.json");
    save_config_to_path(&custom(), &path).unwrap();
    assert!(std::fs::read_to_string(&path).unwrap().trim_start().starts_with('{'));
    assert_eq!(load_config_from_path(&path).unwrap(), custom());
}

#[test]
fn yaml_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scatter.yaml");
    save_config_to_path(&custom(), &path).unwrap();
    assert_eq!(load_config_from_path(&path).unwrap(), custom());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config_from_path(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}
