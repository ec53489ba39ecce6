// Basic cart scenarios, hermetic against the mock shop.

mod common;

use common::MOCK_TIMEOUT;
use saucedemo_e2e::mock::MockShop;
use saucedemo_e2e::{CartPage, Converge, INVENTORY_ITEMS, Session};

#[tokio::test]
async fn adding_a_single_item_shows_it_in_the_cart() {
    common::init_tracing();
    let shop = MockShop::new();
    let products = common::login_to_inventory(&shop).await;
    let item = INVENTORY_ITEMS[0];

    assert!(products.add_item_by_name(item, Converge::None).await.unwrap());
    assert_eq!(products.cart_count().await.unwrap(), 1);

    products.go_to_cart().await.unwrap();
    assert!(shop.current_url().await.unwrap().contains("cart"));
    let cart = CartPage::new(&shop).with_timeout(MOCK_TIMEOUT);
    let items = cart.items().await.unwrap();
    assert_eq!(items.iter().filter(|name| *name == item).count(), 1);
}

#[tokio::test]
async fn adding_several_items_lists_them_all() {
    common::init_tracing();
    let shop = MockShop::new();
    let products = common::login_to_inventory(&shop).await;

    for item in &INVENTORY_ITEMS[..3] {
        assert!(products.add_item_by_name(item, Converge::None).await.unwrap());
    }
    assert_eq!(products.cart_count().await.unwrap(), 3);

    products.go_to_cart().await.unwrap();
    let cart = CartPage::new(&shop).with_timeout(MOCK_TIMEOUT);
    let items = cart.items().await.unwrap();
    for item in &INVENTORY_ITEMS[..3] {
        assert!(items.iter().any(|name| name == item), "missing {item}");
    }
}

#[tokio::test]
async fn removing_an_added_item_empties_the_cart() {
    common::init_tracing();
    let shop = MockShop::new();
    let products = common::login_to_inventory(&shop).await;
    let item = INVENTORY_ITEMS[1];

    assert!(products.add_item_by_name(item, Converge::None).await.unwrap());
    assert_eq!(products.cart_count().await.unwrap(), 1);
    assert!(
        products
            .remove_item_by_name(item, Converge::None)
            .await
            .unwrap()
    );
    assert_eq!(products.cart_count().await.unwrap(), 0);

    products.go_to_cart().await.unwrap();
    let cart = CartPage::new(&shop).with_timeout(MOCK_TIMEOUT);
    assert!(!cart.items().await.unwrap().iter().any(|name| name == item));
    assert!(cart.is_empty().await.unwrap());
}

#[tokio::test]
async fn adding_the_same_item_twice_does_not_duplicate_it() {
    common::init_tracing();
    let shop = MockShop::new();
    let products = common::login_to_inventory(&shop).await;
    let item = INVENTORY_ITEMS[0];

    assert!(products.add_item_by_name(item, Converge::None).await.unwrap());
    // The control has relabeled to remove, so the add identifier resolves to
    // nothing: the second call reports failure instead of double-adding.
    assert!(
        !products
            .add_item_by_name(item, Converge::None)
            .await
            .unwrap()
    );
    assert_eq!(products.cart_count().await.unwrap(), 1);

    products.go_to_cart().await.unwrap();
    let cart = CartPage::new(&shop).with_timeout(MOCK_TIMEOUT);
    let items = cart.items().await.unwrap();
    assert_eq!(items.iter().filter(|name| *name == item).count(), 1);
}

#[tokio::test]
async fn cart_page_remove_clears_the_row() {
    common::init_tracing();
    let shop = MockShop::new();
    let products = common::login_to_inventory(&shop).await;
    let item = INVENTORY_ITEMS[2];

    assert!(products.add_item_by_name(item, Converge::None).await.unwrap());
    products.go_to_cart().await.unwrap();

    let cart = CartPage::new(&shop).with_timeout(MOCK_TIMEOUT);
    assert!(cart.remove_item_by_name(item, Converge::None).await.unwrap());
    assert!(cart.is_empty().await.unwrap());
    // Removing it again is an expected miss, not an error.
    assert!(!cart.remove_item_by_name(item, Converge::None).await.unwrap());
}
