//! In-memory model of the demo shop, implementing [`Session`].
//!
//! Scenarios run against this the way they run against the live site: the
//! page objects cannot tell the difference. The model reproduces the
//! behaviors the suite depends on — login validation with the application's
//! `Epic sadface:` error strings, add/remove controls that relabel between
//! their add and remove identifiers, a cart badge that is absent (not
//! zero-valued) when the cart is empty, and cookie-backed authentication.
//!
//! Two knobs exist purely to drive failure paths that a healthy application
//! never shows: [`MockShop::set_badge_text`] (contract-violating badge text)
//! and [`MockShop::set_badge_lag`] (badge reads stay stale for N lookups, so
//! convergence waiting has something to wait for).

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::config::INVENTORY_ITEMS;
use crate::error::{Error, Result};
use crate::locator::{Locator, Strategy};
use crate::session::Session;

/// Username the model accepts.
pub const VALID_USERNAME: &str = "standard_user";
/// Password the model accepts.
pub const VALID_PASSWORD: &str = "secret_sauce";
/// Username that exists but is locked out.
pub const LOCKED_OUT_USERNAME: &str = "locked_out_user";

const BASE_URL: &str = "https://www.saucedemo.com/";
const INVENTORY_URL: &str = "https://www.saucedemo.com/inventory.html";
const CART_URL: &str = "https://www.saucedemo.com/cart.html";
const CHECKOUT_URL: &str = "https://www.saucedemo.com/checkout-step-one.html";

const ERR_USERNAME_REQUIRED: &str = "Epic sadface: Username is required";
const ERR_PASSWORD_REQUIRED: &str = "Epic sadface: Password is required";
const ERR_LOCKED_OUT: &str = "Epic sadface: Sorry, this user has been locked out.";
const ERR_MISMATCH: &str =
    "Epic sadface: Username and password do not match any user in this service";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Login,
    Inventory,
    Cart,
    CheckoutStepOne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    UsernameField,
    PasswordField,
    LoginButton,
    ErrorRegion,
    /// Inventory item-name element, by catalog index.
    ItemName(usize),
    /// Inventory row container, by catalog index.
    ItemRow(usize),
    /// The row's single action control (add or remove, per cart state).
    RowButton(usize),
    Badge,
    CartLink,
    /// Cart item-name element, by cart position.
    CartItemName(usize),
    /// Cart row container, by cart position.
    CartRow(usize),
    /// Cart row remove control, by cart position.
    CartRowButton(usize),
    ContinueShopping,
    Checkout,
}

/// Element handle produced by [`MockShop`]. Goes stale like a live handle:
/// it refers to a position in the page that rendered it, not to an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockElement(Target);

struct BadgeLag {
    lookups_left: usize,
    stale_count: usize,
}

struct ShopState {
    route: Route,
    url: String,
    logged_in: bool,
    typed_username: String,
    typed_password: String,
    error: Option<String>,
    /// Catalog indices, in insertion order.
    cart: Vec<usize>,
    badge_override: Option<String>,
    badge_lag: Option<BadgeLag>,
}

impl ShopState {
    /// Badge count as currently rendered (stale while lag is active).
    fn badge_now(&self) -> usize {
        match &self.badge_lag {
            Some(lag) if lag.lookups_left > 0 => lag.stale_count,
            _ => self.cart.len(),
        }
    }

    /// Consumes one lagged badge lookup.
    fn tick_badge(&mut self) {
        if let Some(lag) = &mut self.badge_lag {
            if lag.lookups_left > 0 {
                lag.lookups_left -= 1;
            } else {
                self.badge_lag = None;
            }
        }
    }

    fn still_present(&self, target: Target) -> bool {
        match target {
            Target::UsernameField | Target::PasswordField | Target::LoginButton => {
                self.route == Route::Login
            }
            Target::ErrorRegion => self.route == Route::Login && self.error.is_some(),
            Target::ItemName(i) | Target::ItemRow(i) | Target::RowButton(i) => {
                self.route == Route::Inventory && i < INVENTORY_ITEMS.len()
            }
            Target::Badge => self.route != Route::Login && self.badge_now() > 0,
            Target::CartLink => self.route != Route::Login,
            Target::CartItemName(i) | Target::CartRow(i) | Target::CartRowButton(i) => {
                self.route == Route::Cart && i < self.cart.len()
            }
            Target::ContinueShopping | Target::Checkout => self.route == Route::Cart,
        }
    }

    fn submit_login(&mut self) {
        let username = self.typed_username.clone();
        let password = self.typed_password.clone();
        if username.is_empty() {
            self.error = Some(ERR_USERNAME_REQUIRED.into());
        } else if password.is_empty() {
            self.error = Some(ERR_PASSWORD_REQUIRED.into());
        } else if username == LOCKED_OUT_USERNAME && password == VALID_PASSWORD {
            self.error = Some(ERR_LOCKED_OUT.into());
        } else if username == VALID_USERNAME && password == VALID_PASSWORD {
            self.logged_in = true;
            self.error = None;
            self.route = Route::Inventory;
            self.url = INVENTORY_URL.into();
        } else {
            self.error = Some(ERR_MISMATCH.into());
        }
    }
}

/// One hermetic shop session. Create one per scenario, like a fresh browser.
pub struct MockShop {
    state: Mutex<ShopState>,
}

impl Default for MockShop {
    fn default() -> Self {
        Self::new()
    }
}

impl MockShop {
    /// A fresh, logged-out session sitting on the login page.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(ShopState {
                route: Route::Login,
                url: BASE_URL.into(),
                logged_in: false,
                typed_username: String::new(),
                typed_password: String::new(),
                error: None,
                cart: Vec::new(),
                badge_override: None,
                badge_lag: None,
            }),
        }
    }

    /// Forces the badge to render `text` regardless of the cart, to exercise
    /// the contract-violation path.
    pub fn set_badge_text(&self, text: impl Into<String>) {
        self.state.lock().badge_override = Some(text.into());
    }

    /// Makes the next `lookups` badge lookups report `stale_count` instead
    /// of the real cart size, simulating UI lag after a mutation.
    pub fn set_badge_lag(&self, lookups: usize, stale_count: usize) {
        self.state.lock().badge_lag = Some(BadgeLag {
            lookups_left: lookups,
            stale_count,
        });
    }
}

/// Extracts `X` from a `button[data-test='X']` selector.
fn data_test_value(selector: &str) -> Option<&str> {
    selector
        .strip_prefix("button[data-test='")?
        .strip_suffix("']")
}

fn add_id(catalog_index: usize) -> String {
    crate::rows::control_test_id(crate::rows::ADD_PREFIX, INVENTORY_ITEMS[catalog_index])
}

fn remove_id(catalog_index: usize) -> String {
    crate::rows::control_test_id(crate::rows::REMOVE_PREFIX, INVENTORY_ITEMS[catalog_index])
}

fn resolve_all(state: &mut ShopState, locator: &Locator) -> Vec<Target> {
    match (state.route, locator.strategy, locator.value.as_str()) {
        (Route::Login, Strategy::Id, "user-name") => vec![Target::UsernameField],
        (Route::Login, Strategy::Id, "password") => vec![Target::PasswordField],
        (Route::Login, Strategy::Id, "login-button") => vec![Target::LoginButton],
        (Route::Login, Strategy::Css, "h3[data-test='error']") => {
            if state.error.is_some() {
                vec![Target::ErrorRegion]
            } else {
                vec![]
            }
        }
        (Route::Inventory, Strategy::ClassName, "inventory_item_name") => {
            (0..INVENTORY_ITEMS.len()).map(Target::ItemName).collect()
        }
        (Route::Cart, Strategy::ClassName, "inventory_item_name") => {
            (0..state.cart.len()).map(Target::CartItemName).collect()
        }
        (Route::Cart, Strategy::ClassName, "cart_item") => {
            (0..state.cart.len()).map(Target::CartRow).collect()
        }
        (route, Strategy::ClassName, "shopping_cart_badge") if route != Route::Login => {
            let present = state.badge_now() > 0;
            state.tick_badge();
            if present { vec![Target::Badge] } else { vec![] }
        }
        (route, Strategy::ClassName, "shopping_cart_link") if route != Route::Login => {
            vec![Target::CartLink]
        }
        (Route::Cart, Strategy::Id, "continue-shopping") => vec![Target::ContinueShopping],
        (Route::Cart, Strategy::Id, "checkout") => vec![Target::Checkout],
        _ => vec![],
    }
}

fn stale(target: Target) -> Error {
    Error::Driver(format!("stale element reference: {target:?}"))
}

#[async_trait]
impl Session for MockShop {
    type Element = MockElement;

    async fn navigate(&self, url: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.error = None;
        if !state.logged_in {
            // Unauthenticated deep links bounce back to the login form.
            state.route = Route::Login;
            state.url = BASE_URL.into();
            return Ok(());
        }
        state.url = url.into();
        state.route = if url.contains("checkout") {
            Route::CheckoutStepOne
        } else if url.contains("cart") {
            Route::Cart
        } else {
            Route::Inventory
        };
        Ok(())
    }

    async fn find_one(&self, locator: &Locator) -> Result<Option<MockElement>> {
        let mut state = self.state.lock();
        Ok(resolve_all(&mut state, locator)
            .into_iter()
            .next()
            .map(MockElement))
    }

    async fn find_all(&self, locator: &Locator) -> Result<Vec<MockElement>> {
        let mut state = self.state.lock();
        Ok(resolve_all(&mut state, locator)
            .into_iter()
            .map(MockElement)
            .collect())
    }

    async fn find_within(
        &self,
        scope: &MockElement,
        locator: &Locator,
    ) -> Result<Option<MockElement>> {
        let state = self.state.lock();
        if !state.still_present(scope.0) {
            return Err(stale(scope.0));
        }
        let found = match (scope.0, locator.strategy, locator.value.as_str()) {
            (Target::ItemName(i), Strategy::XPath, "../../..") => Some(Target::ItemRow(i)),
            (Target::CartItemName(i), Strategy::XPath, "../../..") => Some(Target::CartRow(i)),
            (Target::ItemRow(i), Strategy::Css, selector) => {
                let wanted = data_test_value(selector);
                let carried = if state.cart.contains(&i) {
                    remove_id(i)
                } else {
                    add_id(i)
                };
                (wanted == Some(carried.as_str())).then_some(Target::RowButton(i))
            }
            (Target::CartRow(i), Strategy::Css, selector) => {
                let wanted = data_test_value(selector);
                let carried = remove_id(state.cart[i]);
                (wanted == Some(carried.as_str())).then_some(Target::CartRowButton(i))
            }
            _ => None,
        };
        Ok(found.map(MockElement))
    }

    async fn click(&self, element: &MockElement) -> Result<()> {
        let mut state = self.state.lock();
        if !state.still_present(element.0) {
            return Err(stale(element.0));
        }
        match element.0 {
            Target::LoginButton => state.submit_login(),
            Target::RowButton(i) => {
                // The live control toggles: one button per row, relabeled
                // between add and remove.
                if let Some(pos) = state.cart.iter().position(|&idx| idx == i) {
                    state.cart.remove(pos);
                } else {
                    state.cart.push(i);
                }
            }
            Target::CartRowButton(i) => {
                state.cart.remove(i);
            }
            Target::CartLink => {
                state.route = Route::Cart;
                state.url = CART_URL.into();
            }
            Target::ContinueShopping => {
                state.route = Route::Inventory;
                state.url = INVENTORY_URL.into();
            }
            Target::Checkout => {
                state.route = Route::CheckoutStepOne;
                state.url = CHECKOUT_URL.into();
            }
            // Focus clicks on fields and text are accepted and do nothing.
            _ => {}
        }
        Ok(())
    }

    async fn fill(&self, element: &MockElement, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        if !state.still_present(element.0) {
            return Err(stale(element.0));
        }
        match element.0 {
            Target::UsernameField => {
                state.typed_username = text.into();
                Ok(())
            }
            Target::PasswordField => {
                state.typed_password = text.into();
                Ok(())
            }
            other => Err(Error::NotInteractable(format!("{other:?} is not an input"))),
        }
    }

    async fn text_of(&self, element: &MockElement) -> Result<String> {
        let state = self.state.lock();
        if !state.still_present(element.0) {
            return Err(stale(element.0));
        }
        let text = match element.0 {
            Target::ItemName(i) => INVENTORY_ITEMS[i].to_string(),
            Target::CartItemName(i) => INVENTORY_ITEMS[state.cart[i]].to_string(),
            Target::Badge => state
                .badge_override
                .clone()
                .unwrap_or_else(|| state.badge_now().to_string()),
            Target::ErrorRegion => state.error.clone().unwrap_or_default(),
            Target::ContinueShopping => "Continue Shopping".to_string(),
            Target::Checkout => "Checkout".to_string(),
            Target::LoginButton => "Login".to_string(),
            _ => String::new(),
        };
        Ok(text)
    }

    async fn is_displayed(&self, element: &MockElement) -> Result<bool> {
        let state = self.state.lock();
        Ok(state.still_present(element.0))
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.state.lock().url.clone())
    }

    async fn delete_cookies(&self) -> Result<()> {
        let mut state = self.state.lock();
        // Authentication and the cart both live in the session cookie.
        state.logged_in = false;
        state.cart.clear();
        Ok(())
    }

    async fn refresh(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.error = None;
        if !state.logged_in {
            state.route = Route::Login;
            state.url = BASE_URL.into();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn logged_in_shop() -> MockShop {
        let shop = MockShop::new();
        let user = shop
            .find_one(&Locator::id("user-name"))
            .await
            .unwrap()
            .unwrap();
        shop.fill(&user, VALID_USERNAME).await.unwrap();
        let pass = shop
            .find_one(&Locator::id("password"))
            .await
            .unwrap()
            .unwrap();
        shop.fill(&pass, VALID_PASSWORD).await.unwrap();
        let submit = shop
            .find_one(&Locator::id("login-button"))
            .await
            .unwrap()
            .unwrap();
        shop.click(&submit).await.unwrap();
        shop
    }

    #[tokio::test]
    async fn badge_is_absent_until_something_is_carted() {
        let shop = logged_in_shop().await;
        let badge = Locator::class_name("shopping_cart_badge");
        assert!(shop.find_one(&badge).await.unwrap().is_none());

        let names = shop
            .find_all(&Locator::class_name("inventory_item_name"))
            .await
            .unwrap();
        let row = shop
            .find_within(&names[0], &Locator::xpath("../../.."))
            .await
            .unwrap()
            .unwrap();
        let button = shop
            .find_within(
                &row,
                &Locator::css(format!("button[data-test='{}']", add_id(0))),
            )
            .await
            .unwrap()
            .unwrap();
        shop.click(&button).await.unwrap();

        let badge = shop.find_one(&badge).await.unwrap().unwrap();
        assert_eq!(shop.text_of(&badge).await.unwrap(), "1");
    }

    #[tokio::test]
    async fn row_control_relabels_after_an_add() {
        let shop = logged_in_shop().await;
        let names = shop
            .find_all(&Locator::class_name("inventory_item_name"))
            .await
            .unwrap();
        let row = shop
            .find_within(&names[0], &Locator::xpath("../../.."))
            .await
            .unwrap()
            .unwrap();
        let add_selector = Locator::css(format!("button[data-test='{}']", add_id(0)));
        let remove_selector = Locator::css(format!("button[data-test='{}']", remove_id(0)));

        let button = shop.find_within(&row, &add_selector).await.unwrap().unwrap();
        shop.click(&button).await.unwrap();

        // The add identifier now resolves to nothing; the remove one works.
        assert!(shop.find_within(&row, &add_selector).await.unwrap().is_none());
        assert!(
            shop.find_within(&row, &remove_selector)
                .await
                .unwrap()
                .is_some()
        );
    }

    #[tokio::test]
    async fn badge_lag_serves_stale_counts_then_catches_up() {
        let shop = logged_in_shop().await;
        let names = shop
            .find_all(&Locator::class_name("inventory_item_name"))
            .await
            .unwrap();
        let row = shop
            .find_within(&names[0], &Locator::xpath("../../.."))
            .await
            .unwrap()
            .unwrap();
        let button = shop
            .find_within(
                &row,
                &Locator::css(format!("button[data-test='{}']", add_id(0))),
            )
            .await
            .unwrap()
            .unwrap();
        shop.click(&button).await.unwrap();
        shop.set_badge_lag(2, 0);

        let badge = Locator::class_name("shopping_cart_badge");
        assert!(shop.find_one(&badge).await.unwrap().is_none());
        assert!(shop.find_one(&badge).await.unwrap().is_none());
        assert!(shop.find_one(&badge).await.unwrap().is_some());
    }
}
