// Error types for saucedemo-e2e

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the demo shop
#[derive(Debug, Error)]
pub enum Error {
    /// A bounded wait elapsed without its condition becoming true
    ///
    /// Query-style callers (`is_visible`, `cart_count`, row resolution)
    /// collapse this to `false`/`0`/`None`; action-style callers surface it.
    #[error("timed out after {timeout_ms}ms waiting for {condition}")]
    Timeout {
        condition: String,
        timeout_ms: u64,
    },

    /// No element matched the locator within the page timeout
    #[error("element not found: {0}")]
    ElementNotFound(String),

    /// Element was located but the interaction could not be dispatched
    ///
    /// Covers covered/disabled targets and stale references. At the
    /// page-object boundary this collapses to the same soft failure as
    /// `ElementNotFound`.
    #[error("element not interactable: {0}")]
    NotInteractable(String),

    /// The cart badge was visible but its text was not a count
    ///
    /// The one fatal condition: the target application's DOM contract
    /// guarantees integer badge text, so anything else means the
    /// application changed shape underneath the suite.
    #[error("cart badge text {text:?} is not a count")]
    BadgeParse { text: String },

    /// Underlying WebDriver failure outside the taxonomy above
    #[error("webdriver error: {0}")]
    Driver(String),

    /// Missing or malformed environment configuration
    #[error("configuration error: {0}")]
    Config(String),
}
