//! Drives the full login → add → cart → remove flow against the live shop.
//!
//! Requires a WebDriver endpoint and credentials:
//!
//!     chromedriver --port=9515 &
//!     WEBDRIVER_URL=http://localhost:9515 \
//!     SAUCE_USERNAME=standard_user SAUCE_PASSWORD=secret_sauce \
//!         cargo run --example cart_walkthrough

use anyhow::{Context, ensure};
use saucedemo_e2e::{
    CartPage, Converge, Credentials, INVENTORY_ITEMS, LoginPage, ProductsPage, Session,
    WebDriverSession, chrome_capabilities, config,
};
use thirtyfour::WebDriver;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let endpoint = config::webdriver_url().context("WEBDRIVER_URL is not set")?;
    let credentials = Credentials::from_env()?;
    let driver = WebDriver::new(endpoint.as_str(), chrome_capabilities()?).await?;

    // Release the session on every exit path, then report the outcome.
    let outcome = walkthrough(&driver, &credentials).await;
    driver.quit().await?;
    outcome
}

async fn walkthrough(driver: &WebDriver, credentials: &Credentials) -> anyhow::Result<()> {
    let session = WebDriverSession::new(driver);

    let login = LoginPage::new(&session);
    login.load().await?;
    login
        .login(&credentials.username, &credentials.password)
        .await?;
    ensure!(
        session.current_url().await?.contains("inventory"),
        "login did not reach the inventory page"
    );
    println!("logged in as {}", credentials.username);

    let products = ProductsPage::new(&session);
    for item in &INVENTORY_ITEMS[..2] {
        ensure!(
            products.add_item_by_name(item, Converge::Badge).await?,
            "could not add {item}"
        );
        println!("added {item} (cart: {})", products.cart_count().await?);
    }

    products.go_to_cart().await?;
    let cart = CartPage::new(&session);
    println!("cart contains: {:?}", cart.items().await?);

    ensure!(
        cart.remove_item_by_name(INVENTORY_ITEMS[0], Converge::None)
            .await?
    );
    println!("removed {}", INVENTORY_ITEMS[0]);
    println!("cart contains: {:?}", cart.items().await?);

    Ok(())
}
