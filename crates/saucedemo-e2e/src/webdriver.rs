//! Live [`Session`] backend over a borrowed `thirtyfour` WebDriver.
//!
//! The scenario harness owns the driver's lifecycle (launch before, `quit`
//! after, on every exit path); this adapter only translates the session
//! capability onto it.

use async_trait::async_trait;
use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use thirtyfour::ChromeCapabilities;

use crate::error::{Error, Result};
use crate::locator::{Locator, Strategy};
use crate::session::Session;

/// [`Session`] implementation over a live WebDriver session.
pub struct WebDriverSession<'d> {
    driver: &'d WebDriver,
}

impl<'d> WebDriverSession<'d> {
    /// Wraps a driver owned by the calling harness.
    pub fn new(driver: &'d WebDriver) -> Self {
        Self { driver }
    }
}

fn to_by(locator: &Locator) -> By {
    match locator.strategy {
        Strategy::Id => By::Id(locator.value.clone()),
        Strategy::ClassName => By::ClassName(locator.value.clone()),
        Strategy::Css => By::Css(locator.value.clone()),
        Strategy::XPath => By::XPath(locator.value.clone()),
    }
}

fn driver_err(err: WebDriverError) -> Error {
    Error::Driver(err.to_string())
}

/// Classifies an interaction failure using the wire protocol's error text.
///
/// The WebDriver protocol reports interactability problems with fixed
/// phrases ("element not interactable", "element click intercepted",
/// "stale element reference"); anything else stays a generic driver error.
fn interaction_err(err: WebDriverError) -> Error {
    let text = err.to_string();
    if text.contains("not interactable")
        || text.contains("click intercepted")
        || text.contains("stale element")
    {
        Error::NotInteractable(text)
    } else {
        Error::Driver(text)
    }
}

#[async_trait]
impl Session for WebDriverSession<'_> {
    type Element = WebElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        self.driver.goto(url).await.map_err(driver_err)
    }

    async fn find_one(&self, locator: &Locator) -> Result<Option<WebElement>> {
        // "Find Elements" answers an empty list for zero matches, which keeps
        // absence an ordinary Ok(None) instead of a driver error to classify.
        let mut found = self
            .driver
            .find_all(to_by(locator))
            .await
            .map_err(driver_err)?;
        if found.is_empty() {
            Ok(None)
        } else {
            Ok(Some(found.remove(0)))
        }
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<WebElement>> {
        self.driver
            .find_all(to_by(locator))
            .await
            .map_err(driver_err)
    }

    async fn find_within(
        &self,
        scope: &WebElement,
        locator: &Locator,
    ) -> Result<Option<WebElement>> {
        let mut found = scope.find_all(to_by(locator)).await.map_err(driver_err)?;
        if found.is_empty() {
            Ok(None)
        } else {
            Ok(Some(found.remove(0)))
        }
    }

    async fn click(&self, element: &WebElement) -> Result<()> {
        element.click().await.map_err(interaction_err)
    }

    async fn fill(&self, element: &WebElement, text: &str) -> Result<()> {
        element.clear().await.map_err(interaction_err)?;
        element.send_keys(text).await.map_err(interaction_err)
    }

    async fn text_of(&self, element: &WebElement) -> Result<String> {
        element.text().await.map_err(driver_err)
    }

    async fn is_displayed(&self, element: &WebElement) -> Result<bool> {
        element.is_displayed().await.map_err(driver_err)
    }

    async fn current_url(&self) -> Result<String> {
        self.driver
            .current_url()
            .await
            .map(|url| url.to_string())
            .map_err(driver_err)
    }

    async fn delete_cookies(&self) -> Result<()> {
        self.driver.delete_all_cookies().await.map_err(driver_err)
    }

    async fn refresh(&self) -> Result<()> {
        self.driver.refresh().await.map_err(driver_err)
    }
}

/// Chrome capabilities matching the upstream harness: headless, sandboxless,
/// and with /dev/shm backing disabled for container use.
pub fn chrome_capabilities() -> Result<ChromeCapabilities> {
    let mut caps = DesiredCapabilities::chrome();
    caps.set_headless().map_err(driver_err)?;
    caps.set_no_sandbox().map_err(driver_err)?;
    caps.set_disable_dev_shm_usage().map_err(driver_err)?;
    Ok(caps)
}
