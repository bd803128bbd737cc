//! In-process URL location.
//!
//! Holds the fragment a terminal session was started with (e.g. pasted from
//! the redirect URL) and records redirects instead of performing them.

use poliseek_application::LocationPort;
use std::sync::Mutex;
use tracing::debug;
use url::Url;

#[derive(Default)]
pub struct MemoryLocation {
    fragment: Mutex<String>,
    assigned: Mutex<Option<Url>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fragment (`#access_token=...`) or a full redirect URL.
    pub fn from_callback(input: &str) -> Self {
        let fragment = match Url::parse(input) {
            Ok(url) => url.fragment().map(|f| format!("#{}", f)).unwrap_or_default(),
            Err(_) if input.is_empty() || input.starts_with('#') => input.to_string(),
            Err(_) => format!("#{}", input),
        };
        Self {
            fragment: Mutex::new(fragment),
            assigned: Mutex::new(None),
        }
    }

    /// The last URL passed to [`LocationPort::assign`]
    pub fn assigned(&self) -> Option<Url> {
        self.assigned.lock().ok().and_then(|url| url.clone())
    }
}

impl LocationPort for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    fn clear_fragment(&self) {
        if let Ok(mut fragment) = self.fragment.lock() {
            fragment.clear();
        }
    }

    fn assign(&self, url: &Url) {
        debug!("Redirect requested to {}", url);
        if let Ok(mut assigned) = self.assigned.lock() {
            *assigned = Some(url.clone());
        }
    }
}
