//! Lightweight per-page session state kept outside the credential store.

use lb_core::{DeviceCategory, IdentityField};

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Mutex;

use log::debug;

/// Key remembering which leaderboard the player last looked at
pub const DEVICE_CATEGORY_KEY: &str = "bubblegame_device_category";

/// String key/value storage with the semantics of a browser's local storage
pub trait SessionMarkers: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Drop the mirrored identity fields
    fn purge_identity(&self) {
        for field in IdentityField::ALL {
            self.remove(field.as_str());
        }
    }

    /// Category to render first.
    ///
    /// A missing or empty value means mobile. Any other value that is not
    /// `mobile` selects mouse and keyboard.
    fn device_category(&self) -> DeviceCategory {
        match self.get(DEVICE_CATEGORY_KEY).as_deref() {
            None | Some("") => DeviceCategory::Mobile,
            Some(value) => DeviceCategory::from_str(value).unwrap_or_else(|e| {
                debug!("Treating stored device category as mnk: {}", e);
                DeviceCategory::Mnk
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionMarkers {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionMarkers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionMarkers for MemorySessionMarkers {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(key);
    }
}
