//! Side-effect hooks the client fires on failed calls.

use std::sync::Mutex;

use tracing::error;

/// Route the client navigates to when the server answers 401.
pub const LOGIN_ROUTE: &str = "/Login";

/// Shows a user-facing error message.
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Performs client-side navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Notifier that reports through the tracing subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn error(&self, message: &str) {
        error!(target: "quill::notify", "{}", message);
    }
}

/// Navigator that remembers the last requested route until the caller takes it.
#[derive(Debug, Default)]
pub struct PendingRoute {
    route: Mutex<Option<String>>,
}

impl PendingRoute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending route, leaving none behind.
    pub fn take(&self) -> Option<String> {
        self.route.lock().ok().and_then(|mut route| route.take())
    }

    pub fn peek(&self) -> Option<String> {
        self.route.lock().ok().and_then(|route| route.clone())
    }
}

impl Navigator for PendingRoute {
    fn navigate(&self, route: &str) {
        if let Ok(mut pending) = self.route.lock() {
            *pending = Some(route.to_string());
        }
    }
}
