//! Location port
//!
//! The slice of browser location the login gate touches: the URL fragment
//! (read on load, cleared after a callback is processed) and full-page
//! redirects to the identity provider.

use url::Url;

pub trait LocationPort: Send + Sync {
    /// Current URL fragment, including the leading `#` if present.
    fn fragment(&self) -> String;

    /// Set the fragment to empty.
    fn clear_fragment(&self);

    /// Begin a full-page redirect to an external URL.
    fn assign(&self, url: &Url);
}
