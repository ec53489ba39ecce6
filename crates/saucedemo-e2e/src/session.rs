//! The browser-session capability consumed by page objects.
//!
//! The suite never launches or tears down a browser itself; it borrows a
//! session from the scenario harness and only observes/mutates the live DOM
//! through this trait. [`crate::webdriver::WebDriverSession`] is the live
//! backend; [`crate::mock::MockShop`] is the hermetic one.

use async_trait::async_trait;

use crate::error::Result;
use crate::locator::Locator;

/// Opaque handle to one browser session.
///
/// Lookup methods report absence as `Ok(None)`/an empty list rather than an
/// error: "nothing matched" is an ordinary answer during a polling wait, and
/// the wait layer is where absence is turned into [`crate::Error::Timeout`].
#[async_trait]
pub trait Session: Send + Sync {
    /// Handle to a located element. Cloning the handle does not re-locate;
    /// a handle can go stale after the page re-renders.
    type Element: Clone + Send + Sync;

    /// Navigates the session to `url`.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Finds the first element matching `locator`, if any.
    async fn find_one(&self, locator: &Locator) -> Result<Option<Self::Element>>;

    /// Finds every element matching `locator`, in DOM order.
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>>;

    /// Finds the first match for `locator` scoped under `scope`.
    ///
    /// This is the row-finder capability: relative XPath ascends out of the
    /// scope element, CSS descends into it.
    async fn find_within(
        &self,
        scope: &Self::Element,
        locator: &Locator,
    ) -> Result<Option<Self::Element>>;

    /// Clicks `element`.
    async fn click(&self, element: &Self::Element) -> Result<()>;

    /// Clears `element`'s current content, then types `text` into it.
    async fn fill(&self, element: &Self::Element, text: &str) -> Result<()>;

    /// Reads `element`'s rendered text.
    async fn text_of(&self, element: &Self::Element) -> Result<String>;

    /// Whether `element` is currently displayed.
    async fn is_displayed(&self, element: &Self::Element) -> Result<bool>;

    /// The session's current URL.
    async fn current_url(&self) -> Result<String>;

    /// Deletes every cookie held by the session.
    async fn delete_cookies(&self) -> Result<()>;

    /// Reloads the current page.
    async fn refresh(&self) -> Result<()>;
}
