//! Browser-backed location

use colored::Colorize;
use poliseek_application::LocationPort;
use poliseek_infrastructure::MemoryLocation;
use tracing::warn;
use url::Url;

/// The fragment lives in memory; redirects open the system browser.
///
/// The authorize URL is always printed as well, so sign-in still works on a
/// machine without a browser.
pub struct BrowserLocation {
    inner: MemoryLocation,
    open_browser: bool,
}

impl BrowserLocation {
    pub fn new(inner: MemoryLocation) -> Self {
        Self {
            inner,
            open_browser: true,
        }
    }

    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    pub fn assigned(&self) -> Option<Url> {
        self.inner.assigned()
    }
}

impl LocationPort for BrowserLocation {
    fn fragment(&self) -> String {
        self.inner.fragment()
    }

    fn clear_fragment(&self) {
        self.inner.clear_fragment();
    }

    fn assign(&self, url: &Url) {
        self.inner.assign(url);
        eprintln!("{} {}", "Continue sign-in at:".cyan().bold(), url);
        if self.open_browser
            && let Err(e) = open::that(url.as_str())
        {
            warn!("Could not open browser: {}", e);
        }
    }
}
