#![allow(dead_code)]

use lb_core::NewIdentity;
use lb_db::{CredentialRepository, StoreFactory};
use lb_widget::{MemoryScoreBoard, MemorySessionMarkers, Navigator, Notifier, PageHost};

use std::env;
use std::sync::{Arc, Mutex};

use serde_json::json;
use tempfile::TempDir;

/// Navigator that records every URL it is sent to
#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) {
        self.visited.lock().unwrap().push(url.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Page host backed by recording/in-memory fakes, with typed handles kept
/// for assertions.
pub struct TestPage {
    pub markers: Arc<MemorySessionMarkers>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
    pub board: Arc<MemoryScoreBoard>,
}

impl TestPage {
    pub fn new() -> Self {
        Self {
            markers: Arc::new(MemorySessionMarkers::new()),
            navigator: Arc::new(RecordingNavigator::default()),
            notifier: Arc::new(RecordingNotifier::default()),
            board: Arc::new(MemoryScoreBoard::new()),
        }
    }

    pub fn host(&self) -> PageHost {
        PageHost {
            markers: self.markers.clone(),
            navigator: self.navigator.clone(),
            notifier: self.notifier.clone(),
            board: self.board.clone(),
        }
    }
}

pub fn create_test_repository() -> (TempDir, Arc<CredentialRepository>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let factory = StoreFactory::new(temp_dir.path().join("credentials.db"));
    (temp_dir, Arc::new(CredentialRepository::new(factory)))
}

pub fn create_test_identity(username: &str) -> NewIdentity {
    NewIdentity::new(
        username,
        format!("access-{}", username),
        format!("refresh-{}", username),
    )
}

pub fn score_json(username: &str, rank: u32) -> serde_json::Value {
    json!({
        "username": username,
        "score": 1000.0 - rank as f64,
        "accuracy": 0.75,
        "pops": 100 + rank,
        "rank": rank
    })
}

/// RAII guard for environment variables - automatically restores on drop
pub struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}
