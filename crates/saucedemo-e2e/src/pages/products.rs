//! Products (inventory) page object: add/remove by display name, badge
//! reading, cart navigation.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::page::PageObject;
use crate::pages::{self, Converge, CountShift, badge_locator};
use crate::rows::{ADD_PREFIX, REMOVE_PREFIX};
use crate::session::Session;
use crate::wait::DEFAULT_TIMEOUT;

/// Page object for the inventory listing.
pub struct ProductsPage<'s, S: Session> {
    session: &'s S,
    timeout: Duration,
}

impl<'s, S: Session> ProductsPage<'s, S> {
    /// Entry URL.
    pub const URL: &'static str = "https://www.saucedemo.com/inventory.html";

    fn cart_link() -> Locator {
        Locator::class_name("shopping_cart_link")
    }

    fn item_names() -> Locator {
        Locator::class_name("inventory_item_name")
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

    /// Navigates straight to the inventory listing.
    pub async fn load(&self) -> Result<()> {
        self.session.navigate(Self::URL).await
    }

    /// Adds the item displaying `name` to the cart.
    ///
    /// `false` covers every expected miss: the name is not in the catalog,
    /// or the item is already in the cart (its control has relabeled to
    /// remove, so the add identifier resolves to nothing) — callers detect
    /// "already present" as a negative result, never an error. With
    /// [`Converge::Badge`], success additionally requires the badge to reach
    /// the pre-click count plus one.
    pub async fn add_item_by_name(&self, name: &str, converge: Converge) -> Result<bool> {
        pages::mutate_cart_row(
            self.session,
            &Self::item_names(),
            name,
            ADD_PREFIX,
            CountShift::Increment,
            converge,
        )
        .await
    }

    /// Removes the item displaying `name` from the cart; `false` when the
    /// item is absent. With [`Converge::Badge`], waits for the badge to drop
    /// by one (floored at zero).
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

    /// Number of items the cart badge currently shows.
    ///
    /// The badge is absent (not zero-valued) when the cart is empty, so an
    /// invisible badge answers 0. Visible non-integer text fails with
    /// [`Error::BadgeParse`].
    pub async fn cart_count(&self) -> Result<u32> {
        if self.is_visible(&badge_locator()).await {
            let element = self.find(&badge_locator()).await?;
            let text = self.session.text_of(&element).await?;
            text.trim()
                .parse()
                .map_err(|_| Error::BadgeParse { text })
        } else {
            Ok(0)
        }
    }

    /// Clicks through to the cart page. Fire-and-forget: the caller asserts
    /// the resulting URL.
    pub async fn go_to_cart(&self) -> Result<()> {
        self.click(&Self::cart_link()).await
    }
}

#[async_trait]
impl<S: Session> PageObject<S> for ProductsPage<'_, S> {
    fn session(&self) -> &S {
        self.session
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
