use aesthetics_preview::config::Config;
use aesthetics_preview::overlay::{OverlayOutcome, run_for_page};
use aesthetics_preview::scoring::ScoringClient;
use std::fs;
use std::sync::{Mutex, MutexGuard};
use tempfile::TempDir;

const OVERRIDES: [&str; 5] = [
    "AESTHETICS_ENDPOINT",
    "AESTHETICS_API_KEY",
    "AESTHETICS_TIMEOUT_SECS",
    "AESTHETICS_ENABLED",
    "AESTHETICS_LOG_LEVEL",
];

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Removes the `AESTHETICS_*` overrides for the life of a test and puts any
/// exported values back on drop.
struct ClearedOverrides {
    saved: Vec<(&'static str, String)>,
    _lock: MutexGuard<'static, ()>,
}

impl ClearedOverrides {
    fn new() -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let saved = OVERRIDES
            .iter()
            .filter_map(|&key| std::env::var(key).ok().map(|value| (key, value)))
            .collect();
        for key in OVERRIDES {
            // SAFETY: ENV_LOCK serializes every test in this binary that
            // touches these variables.
            unsafe { std::env::remove_var(key) };
        }
        Self { saved, _lock: lock }
    }
}

impl Drop for ClearedOverrides {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            // SAFETY: the lock is still held.
            unsafe { std::env::set_var(key, value) };
        }
    }
}

fn write_config(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn partial_file_fills_remaining_defaults() {
    let _env = ClearedOverrides::new();
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[scoring]
endpoint = "http://127.0.0.1:9/score"
timeout_secs = 5

[overlay]
live_suffix = ".aem.live"
"#,
    );

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.scoring.endpoint, "http://127.0.0.1:9/score");
    assert_eq!(config.scoring.timeout_secs, 5);
    assert_eq!(config.overlay.live_suffix, ".aem.live");
    assert_eq!(config.overlay.preview_suffix, ".hlx.page");
    assert!(config.overlay.enabled);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn non_http_endpoint_is_rejected() {
    let _env = ClearedOverrides::new();
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[scoring]\nendpoint = \"ftp://scores.example\"\n");

    assert!(Config::load_from(&path).is_err());
}

#[tokio::test]
async fn disabled_overlay_skips_scoring() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[scoring]\nendpoint = \"http://127.0.0.1:9/score\"\n\n[overlay]\nenabled = false\n",
    );
    let config = {
        let _env = ClearedOverrides::new();
        Config::load_from(&path).unwrap()
    };
    let client = ScoringClient::from_config(&config.scoring);

    let outcome = run_for_page(&client, &config, "https://main--site--org.hlx.page/")
        .await
        .unwrap();

    assert_eq!(outcome, OverlayOutcome::Disabled);
}

#[test]
fn exported_overrides_do_not_leak_into_file_values() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[scoring]\nendpoint = \"http://127.0.0.1:9/score\"\n");

    let _env = ClearedOverrides::new();
    // SAFETY: ENV_LOCK is held through `_env`.
    unsafe { std::env::set_var("AESTHETICS_ENABLED", "0") };
    let overridden = Config::load_from(&path).unwrap();
    unsafe { std::env::remove_var("AESTHETICS_ENABLED") };
    let plain = Config::load_from(&path).unwrap();

    assert!(!overridden.overlay.enabled);
    assert!(plain.overlay.enabled);
}
