/// Preferences kept in chrome.storage.local

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::bridge;
use crate::error::ValidationError;
use crate::supabase::SupabaseClient;

pub const PREFERENCES_KEY: &str = "surfboard_preferences";

/// User settings: who is saving, and where the shared table lives
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub member_name: String,
    #[serde(default)]
    pub supabase_url: String,
    #[serde(default)]
    pub supabase_anon_key: String,
}

impl Preferences {
    /// Contributor name copied into `saved_by`
    pub fn member(&self) -> Result<&str, ValidationError> {
        let name = self.member_name.trim();
        if name.is_empty() {
            Err(ValidationError::MissingPreference("display name"))
        } else {
            Ok(name)
        }
    }

    pub fn client(&self) -> Result<SupabaseClient, ValidationError> {
        let url = self.supabase_url.trim();
        let key = self.supabase_anon_key.trim();

        if url.is_empty() {
            return Err(ValidationError::MissingPreference("Supabase URL"));
        }
        if key.is_empty() {
            return Err(ValidationError::MissingPreference("Supabase anon key"));
        }

        Ok(SupabaseClient::new(url, key))
    }
}

fn decode(stored: JsValue) -> Result<Preferences, String> {
    if stored.is_null() || stored.is_undefined() {
        Ok(Preferences::default())
    } else {
        serde_wasm_bindgen::from_value(stored)
            .map_err(|e| format!("Failed to parse preferences: {:?}", e))
    }
}

pub async fn load_preferences() -> Result<Preferences, String> {
    let stored = bridge::getStorage(PREFERENCES_KEY)
        .await
        .map_err(|e| format!("Failed to get storage: {:?}", e))?;

    decode(stored)
}

pub async fn save_preferences(preferences: &Preferences) -> Result<(), String> {
    let value = serde_wasm_bindgen::to_value(preferences)
        .map_err(|e| format!("Failed to serialize preferences: {:?}", e))?;

    bridge::setStorage(PREFERENCES_KEY, value)
        .await
        .map_err(|e| format!("Failed to save preferences: {:?}", e))
}
