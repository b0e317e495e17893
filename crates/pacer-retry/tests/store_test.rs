use pacer_core::config::RetryConfig;
use pacer_core::errors::{PacerError, StoreError};
use pacer_retry::{JsonParamStore, MemoryParamStore, ParamStore, StoredParams};

#[test]
fn missing_file_reads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonParamStore::new(dir.path().join("absent.json"));
    assert!(store.machine("m1").unwrap().is_none());
    assert!(store.get("m1", "fetch").unwrap().is_none());
}

#[test]
fn empty_file_reads_as_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(&path, "").unwrap();
    assert!(JsonParamStore::new(&path).machine("m1").unwrap().is_none());
}

#[test]
fn put_then_get_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("params.json");
    let mut store = JsonParamStore::new(&path);

    let params = StoredParams::new(3.5, 0.5);
    store.put("m1", "fetch", params.clone()).unwrap();
    store.put("m1", "upload", StoredParams::new(8.0, 1.0)).unwrap();
    assert!(path.is_file());

    let reopened = JsonParamStore::new(&path);
    assert_eq!(reopened.get("m1", "fetch").unwrap(), Some(params));
    assert_eq!(reopened.machine("m1").unwrap().unwrap().len(), 2);
    assert!(reopened.get("m2", "fetch").unwrap().is_none());
}

#[test]
fn put_overwrites_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonParamStore::new(dir.path().join("params.json"));
    store.put("m1", "fetch", StoredParams::new(1.0, 0.0)).unwrap();
    store.put("m1", "fetch", StoredParams::new(2.0, 0.0)).unwrap();
    assert_eq!(store.require("m1", "fetch").unwrap().last_nudge, 2.0);
}

#[test]
fn require_distinguishes_missing_machine_and_param() {
    let mut store = MemoryParamStore::new();
    assert!(matches!(
        store.require("m1", "fetch").unwrap_err(),
        PacerError::Store(StoreError::MachineNotFound { .. })
    ));

    store.put("m1", "upload", StoredParams::new(1.0, 0.0)).unwrap();
    assert!(matches!(
        store.require("m1", "fetch").unwrap_err(),
        PacerError::Store(StoreError::ParamNotFound { .. })
    ));
}

#[test]
fn reset_clears_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonParamStore::new(dir.path().join("params.json"));
    store.put("m1", "fetch", StoredParams::new(1.0, 0.0)).unwrap();
    store.reset().unwrap();
    assert!(store.machine("m1").unwrap().is_none());

    let mut memory = MemoryParamStore::new();
    memory.put("m1", "fetch", StoredParams::new(1.0, 0.0)).unwrap();
    memory.reset().unwrap();
    assert!(memory.machine("m1").unwrap().is_none());
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");
    std::fs::write(&path, "{not json").unwrap();
    let err = JsonParamStore::new(&path).machine("m1").unwrap_err();
    assert!(matches!(
        err,
        PacerError::Store(StoreError::Serialization { .. })
    ));
}

#[test]
fn store_path_comes_from_config() {
    assert!(JsonParamStore::from_config(&RetryConfig::default()).is_none());

    let config = RetryConfig {
        store_path: Some("/tmp/pacer-params.json".to_string()),
        ..Default::default()
    };
    let store = JsonParamStore::from_config(&config).unwrap();
    assert_eq!(store.path().to_str(), Some("/tmp/pacer-params.json"));
}

#[test]
fn stored_params_usability() {
    assert!(StoredParams::new(2.0, 0.0).is_usable());
    assert!(!StoredParams::new(1.0, 1.0).is_usable());
    assert!(!StoredParams::new(f64::NAN, 0.0).is_usable());
}
