//! Console notification backend
//!
//! Last-resort fallback for environments without any notification
//! surface: writes one diagnostic line per toast.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::dispatch::ActivationSink;
use crate::application::ports::{NotifierError, PlatformNotifier};
use crate::domain::{AppIdentity, ToastRequest};

/// Console backend writing `[Toast] <title>: <body>` lines.
///
/// Writes to stderr by default; the sink is injectable so hosts (and
/// tests) can capture the stream.
pub struct ConsoleNotifier {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleNotifier {
    /// Create a console backend writing to stderr
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a console backend writing to the given sink
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Mutex::new(Box::new(writer)),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformNotifier for ConsoleNotifier {
    async fn setup(
        &self,
        _identity: &AppIdentity,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        // No setup required for the console fallback.
        Ok(())
    }

    async fn render(
        &self,
        _identity: &AppIdentity,
        request: ToastRequest,
        _activations: ActivationSink,
    ) -> Result<(), NotifierError> {
        let mut sink = self.sink.lock().expect("console sink lock poisoned");
        writeln!(sink, "[Toast] {}: {}", request.title, request.body)
            .and_then(|_| sink.flush())
            .map_err(|e| NotifierError::RenderFailed(e.to_string()))
    }
}
