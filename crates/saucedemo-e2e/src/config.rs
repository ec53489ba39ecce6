//! Environment-driven configuration and static scenario data.
//!
//! Scenarios receive everything from here explicitly; nothing in the suite
//! reads ambient per-file globals.

use std::env;

use crate::error::{Error, Result};

/// The demo shop's six catalog items, as displayed on the inventory page.
///
/// Passed into scenarios as data rather than duplicated per scenario file.
pub const INVENTORY_ITEMS: [&str; 6] = [
    "Sauce Labs Backpack",
    "Sauce Labs Bike Light",
    "Sauce Labs Bolt T-Shirt",
    "Sauce Labs Fleece Jacket",
    "Sauce Labs Onesie",
    "Test.allTheThings() T-Shirt (Red)",
];

/// Login credentials for the live application, supplied out-of-band.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Reads `SAUCE_USERNAME`/`SAUCE_PASSWORD`, honoring a `.env` file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let username = env::var("SAUCE_USERNAME")
            .map_err(|_| Error::Config("SAUCE_USERNAME is not set".into()))?;
        let password = env::var("SAUCE_PASSWORD")
            .map_err(|_| Error::Config("SAUCE_PASSWORD is not set".into()))?;
        Ok(Self { username, password })
    }
}

/// WebDriver endpoint for live scenarios (`WEBDRIVER_URL`).
///
/// `None` means no driver is available and the live suite self-skips.
pub fn webdriver_url() -> Option<String> {
    dotenvy::dotenv().ok();
    env::var("WEBDRIVER_URL").ok()
}
