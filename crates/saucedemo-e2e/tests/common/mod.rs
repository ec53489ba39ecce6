#![allow(dead_code)] // each test binary uses its own slice of these fixtures

//! Shared scenario fixtures.

use std::sync::Once;
use std::time::Duration;

use saucedemo_e2e::mock::{MockShop, VALID_PASSWORD, VALID_USERNAME};
use saucedemo_e2e::{LoginPage, ProductsPage, Session};

/// Element timeout for hermetic scenarios. The mock renders instantly, so
/// absence checks should not burn the live-page default.
pub const MOCK_TIMEOUT: Duration = Duration::from_millis(200);

/// Installs the tracing subscriber once per test binary.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Logs in with the valid credentials and lands on the inventory page —
/// the starting state every cart scenario shares.
pub async fn login_to_inventory(shop: &MockShop) -> ProductsPage<'_, MockShop> {
    let login = LoginPage::new(shop).with_timeout(MOCK_TIMEOUT);
    login.load().await.expect("load login page");
    login
        .login(VALID_USERNAME, VALID_PASSWORD)
        .await
        .expect("submit login form");
    assert!(
        shop.current_url()
            .await
            .expect("read current url")
            .contains("inventory"),
        "login should land on the inventory page"
    );
    ProductsPage::new(shop).with_timeout(MOCK_TIMEOUT)
}
