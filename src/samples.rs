//! Built-in sample inputs for the CLI and the demo shell, embedded at compile
//! time. Keys: `dominant`, `basic`, `close`, `scores`.

use std::collections::HashMap;

use once_cell::sync::Lazy;

static SAMPLES: Lazy<HashMap<String, String>> = Lazy::new(|| {
    let raw = include_str!("../samples.json");
    serde_json::from_str::<HashMap<String, String>>(raw).expect("valid samples json")
});

/// Look up a sample input by key.
pub fn sample(key: &str) -> Option<&'static str> {
    SAMPLES.get(key).map(String::as_str)
}

/// Sorted list of available sample keys, for `--sample` help and errors.
pub fn sample_keys() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = SAMPLES.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
