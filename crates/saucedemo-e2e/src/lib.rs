//! saucedemo-e2e: page-object end-to-end suite for the Sauce Labs demo shop.
//!
//! The crate is the page-object layer — locators, bounded waits, a
//! browser-session capability, and one page object per shop page — plus an
//! in-memory model of the shop so scenarios can run hermetically. The live
//! backend drives a WebDriver session; the scenario harness owns that
//! session's lifecycle, the pages only borrow it.
//!
//! # Example
//!
//! ```ignore
//! use saucedemo_e2e::{Converge, LoginPage, ProductsPage, WebDriverSession};
//! use thirtyfour::WebDriver;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let driver = WebDriver::new(
//!         "http://localhost:9515",
//!         saucedemo_e2e::chrome_capabilities()?,
//!     )
//!     .await?;
//!     let session = WebDriverSession::new(&driver);
//!
//!     let login = LoginPage::new(&session);
//!     login.load().await?;
//!     login.login("standard_user", "secret_sauce").await?;
//!
//!     let products = ProductsPage::new(&session);
//!     let added = products
//!         .add_item_by_name("Sauce Labs Backpack", Converge::Badge)
//!         .await?;
//!     assert!(added);
//!     assert_eq!(products.cart_count().await?, 1);
//!
//!     driver.quit().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod locator;
pub mod mock;
pub mod page;
pub mod pages;
pub mod session;
pub mod wait;
pub mod webdriver;

mod rows;

pub use config::{Credentials, INVENTORY_ITEMS};
pub use error::{Error, Result};
pub use locator::{Locator, Strategy};
pub use page::PageObject;
pub use pages::{CartPage, Converge, LoginPage, ProductsPage};
pub use session::Session;
pub use wait::Wait;
pub use webdriver::{WebDriverSession, chrome_capabilities};
