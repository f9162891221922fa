//! Settings Port (Driven Port)
//!
//! Read access to the session settings the client was started with.

/// Global (default section) setting lookup.
pub trait SettingsLookup: Send + Sync {
    /// Value of a key in the global section, if present.
    fn global_setting(&self, key: &str) -> Option<&str>;
}
