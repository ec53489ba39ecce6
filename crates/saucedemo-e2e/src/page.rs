//! Page-object base: the element-interaction/wait contract shared by every
//! page.
//!
//! Each concrete page supplies its session handle and default timeout; the
//! provided methods wrap every interaction in a bounded presence (or
//! visibility) wait so nothing is clicked or typed into before it has been
//! observed on the page.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::Wait;

/// Common element actions for a page backed by session `S`.
#[async_trait]
pub trait PageObject<S: Session> {
    /// The borrowed session this page drives.
    fn session(&self) -> &S;

    /// Default timeout for element actions on this page.
    fn timeout(&self) -> Duration;

    /// Waits for `locator` to be present and returns its element.
    ///
    /// Fails with [`Error::ElementNotFound`] once the page timeout elapses.
    async fn find(&self, locator: &Locator) -> Result<S::Element> {
        let session = self.session();
        Wait::new(self.timeout())
            .until(&locator.to_string(), || async move {
                session.find_one(locator).await
            })
            .await
            .map_err(|err| match err {
                Error::Timeout { .. } => Error::ElementNotFound(locator.to_string()),
                other => other,
            })
    }

    /// Waits for `locator`, then clicks it.
    async fn click(&self, locator: &Locator) -> Result<()> {
        let element = self.find(locator).await?;
        self.session().click(&element).await
    }

    /// Waits for `locator`, clears its content, then types `text`.
    async fn type_text(&self, locator: &Locator, text: &str) -> Result<()> {
        let element = self.find(locator).await?;
        self.session().fill(&element, text).await
    }

    /// Whether `locator` becomes visible within the page timeout.
    ///
    /// Visibility checks are queries, not assertions: timeout and transient
    /// driver failures both answer `false`, and a scenario is never aborted
    /// from here.
    async fn is_visible(&self, locator: &Locator) -> bool {
        let session = self.session();
        Wait::new(self.timeout())
            .until(&locator.to_string(), || async move {
                match session.find_one(locator).await {
                    Ok(Some(element)) => match session.is_displayed(&element).await {
                        Ok(true) => Ok(Some(())),
                        // Hidden, or went stale between lookup and check.
                        _ => Ok(None),
                    },
                    _ => Ok(None),
                }
            })
            .await
            .is_ok()
    }
}
