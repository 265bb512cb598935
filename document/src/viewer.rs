//! Gateway fetch with load-completion tracking.

use std::time::Duration;

use crate::error::DocumentError;

/// Callback fired on the first successful load.
type OnLoad = Box<dyn FnOnce() + Send>;

/// Views the charter document behind a gateway URL.
///
/// `is_loaded` stays false until a load succeeds, so callers can render a
/// loading indicator that is visible before completion and hidden after.
/// The completion callback fires exactly once, however many times `load`
/// is called.
pub struct DocumentViewer {
    http: reqwest::Client,
    url: String,
    loaded: bool,
    on_load: Option<OnLoad>,
}

/// The fetched charter content.
#[derive(Clone, Debug)]
pub struct LoadedDocument {
    bytes: Vec<u8>,
    content_type: Option<String>,
}

impl LoadedDocument {
    /// Raw document bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The gateway's Content-Type header, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Best-effort text rendering of the document.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

impl DocumentViewer {
    /// Create a viewer for the given URL with a 30-second load timeout.
    pub fn new(url: impl Into<String>) -> Result<Self, DocumentError> {
        Self::with_timeout(url, Duration::from_secs(30))
    }

    /// Create a viewer with an explicit load timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, DocumentError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DocumentError::Fetch(format!("failed to create HTTP client: {e}")))?;
        Ok(Self {
            http,
            url: url.into(),
            loaded: false,
            on_load: None,
        })
    }

    /// Register the load-completion callback.
    pub fn on_load(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_load = Some(Box::new(callback));
        self
    }

    /// The URL this viewer loads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether a load has completed successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch the document.
    ///
    /// On the first success the loaded flag flips and the completion
    /// callback fires; on failure both are left untouched.
    pub async fn load(&mut self) -> Result<LoadedDocument, DocumentError> {
        tracing::debug!(url = %self.url, "loading charter document");
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DocumentError::Fetch(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocumentError::Http {
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DocumentError::Fetch(format!("failed to read body: {e}")))?
            .to_vec();

        self.loaded = true;
        if let Some(callback) = self.on_load.take() {
            callback();
        }
        tracing::info!(url = %self.url, bytes = bytes.len(), "charter document loaded");

        Ok(LoadedDocument {
            bytes,
            content_type,
        })
    }
}
