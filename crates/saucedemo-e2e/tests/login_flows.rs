// Login scenarios, hermetic against the mock shop.
//
// The post-condition of a login attempt is either a URL transition or an
// error region appearing; `login` itself never waits, so every scenario
// asserts one of the two explicitly.

mod common;

use common::MOCK_TIMEOUT;
use saucedemo_e2e::mock::{LOCKED_OUT_USERNAME, MockShop, VALID_PASSWORD, VALID_USERNAME};
use saucedemo_e2e::{LoginPage, Session};

async fn submit<'a>(shop: &'a MockShop, username: &str, password: &str) -> LoginPage<'a, MockShop> {
    let login = LoginPage::new(shop).with_timeout(MOCK_TIMEOUT);
    login.load().await.expect("load login page");
    login.login(username, password).await.expect("submit login");
    login
}

#[tokio::test]
async fn valid_credentials_land_on_inventory() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, VALID_USERNAME, VALID_PASSWORD).await;
    assert!(shop.current_url().await.unwrap().contains("inventory"));
    assert_eq!(login.error_message().await.unwrap(), None);
}

#[tokio::test]
async fn mismatched_credentials_report_an_error() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, "invalid_user", "wrong_pass").await;
    let error = login
        .error_message()
        .await
        .unwrap()
        .expect("an error region should appear");
    assert!(error.contains("do not match"), "unexpected error: {error}");
    assert!(!shop.current_url().await.unwrap().contains("inventory"));
}

#[tokio::test]
async fn empty_fields_require_a_username() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, "", "").await;
    let error = login.error_message().await.unwrap().unwrap();
    assert!(error.contains("Username is required"));
    assert!(!shop.current_url().await.unwrap().contains("inventory"));
}

#[tokio::test]
async fn empty_username_is_reported_before_the_password() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, "", "somepassword").await;
    let error = login.error_message().await.unwrap().unwrap();
    assert!(error.contains("Username is required"));
}

#[tokio::test]
async fn empty_password_is_reported() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, "someuser", "").await;
    let error = login.error_message().await.unwrap().unwrap();
    assert!(error.contains("Password is required"));
}

#[tokio::test]
async fn locked_out_user_is_told_so() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, LOCKED_OUT_USERNAME, VALID_PASSWORD).await;
    let error = login.error_message().await.unwrap().unwrap();
    assert!(error.to_lowercase().contains("locked out"));
}

#[tokio::test]
async fn special_characters_fall_through_to_a_mismatch() {
    common::init_tracing();
    let shop = MockShop::new();
    let login = submit(&shop, "!@#$%^&*()", "<script>alert(1)</script>").await;
    let error = login.error_message().await.unwrap().unwrap();
    assert!(error.contains("do not match"));
    assert!(!shop.current_url().await.unwrap().contains("inventory"));
}
