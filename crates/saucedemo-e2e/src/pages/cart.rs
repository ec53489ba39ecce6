//! Cart page object: item listing, removal, and onward navigation.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::locator::Locator;
use crate::page::PageObject;
use crate::pages::{self, Converge, CountShift};
use crate::rows::REMOVE_PREFIX;
use crate::session::Session;
use crate::wait::DEFAULT_TIMEOUT;

/// Page object for the shopping cart.
pub struct CartPage<'s, S: Session> {
    session: &'s S,
    timeout: Duration,
}

impl<'s, S: Session> CartPage<'s, S> {
    /// Entry URL.
    pub const URL: &'static str = "https://www.saucedemo.com/cart.html";

    fn cart_rows() -> Locator {
        Locator::class_name("cart_item")
    }

    fn item_names() -> Locator {
        Locator::class_name("inventory_item_name")
    }

    fn continue_shopping_button() -> Locator {
        Locator::id("continue-shopping")
    }

    fn checkout_button() -> Locator {
        Locator::id("checkout")
    }

    /// Binds the page to a borrowed session with the default timeout.
    pub fn new(session: &'s S) -> Self {
        Self {
            session,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the element-action timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Navigates straight to the cart.
    ///
    /// Only meaningful on a session that already holds an authenticated
    /// state; otherwise the application redirects, which this layer does not
    /// special-case.
    pub async fn load(&self) -> Result<()> {
        self.session.navigate(Self::URL).await
    }

    /// Display names of every item in the cart, in DOM order; may be empty.
    pub async fn items(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for element in self.session.find_all(&Self::item_names()).await? {
            names.push(self.session.text_of(&element).await?);
        }
        Ok(names)
    }

    /// Removes the item displaying `name` from the cart; `false` when it is
    /// not there. The convergence policy is the same explicit opt-in as on
    /// the products page.
    pub async fn remove_item_by_name(&self, name: &str, converge: Converge) -> Result<bool> {
        pages::mutate_cart_row(
            self.session,
            &Self::item_names(),
            name,
            REMOVE_PREFIX,
            CountShift::Decrement,
            converge,
        )
        .await
    }

    /// Whether the cart holds no rows at all.
    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.session.find_all(&Self::cart_rows()).await?.is_empty())
    }

    /// Returns to the inventory listing.
    pub async fn continue_shopping(&self) -> Result<()> {
        self.click(&Self::continue_shopping_button()).await
    }

    /// Proceeds to the first checkout step.
    pub async fn checkout(&self) -> Result<()> {
        self.click(&Self::checkout_button()).await
    }
}

#[async_trait]
impl<S: Session> PageObject<S> for CartPage<'_, S> {
    fn session(&self) -> &S {
        self.session
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
