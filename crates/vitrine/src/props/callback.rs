use std::fmt;
use std::sync::Arc;

/// Host-supplied handler a theme invokes for a user action.
///
/// Themes never fetch or mutate data themselves; they only call these.
pub struct Callback<T>(Arc<dyn Fn(T) + Send + Sync>);

impl<T> Callback<T> {
    pub fn new(f: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, value: T) {
        (self.0)(value)
    }
}

impl<T: 'static> Callback<T> {
    /// A handler that ignores its input.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: 'static> Default for Callback<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
