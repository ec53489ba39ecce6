//! Name-to-control resolution for inventory and cart rows.
//!
//! Item rows expose no stable identifier of their own, so resolution is a
//! structural join in two independent stages:
//!
//! 1. row lookup — enumerate the page's item-name elements, take the first
//!    whose text equals the requested name exactly, and ascend to the row
//!    container enclosing it;
//! 2. control lookup — derive the action control's `data-test` identifier
//!    from the display name and find it inside that row.
//!
//! A miss at either stage is an expected outcome (absent item, relabeled
//! control), reported through [`RowResolution`] and collapsed to a boolean
//! only at the page-object boundary.

use crate::error::Result;
use crate::locator::Locator;
use crate::session::Session;

/// `data-test` prefix on add controls.
pub(crate) const ADD_PREFIX: &str = "add-to-cart-";

/// `data-test` prefix on remove controls.
pub(crate) const REMOVE_PREFIX: &str = "remove-";

/// Ancestor path from an item-name element up to its row container.
///
/// Coupled to the application's DOM shape (name sits three levels below the
/// row); a markup change here breaks stage 1 only, never the identifier
/// derivation.
const ROW_ANCESTOR: &str = "../../..";

/// Outcome of resolving a display name to its row action control.
#[derive(Debug)]
pub(crate) enum RowResolution<E> {
    /// The control, ready to click.
    Control(E),
    /// No item-name element matched the requested name.
    NameNotMatched,
    /// The name matched but the derived control (or the row container
    /// itself) was missing — the control has relabeled, or the DOM shape
    /// changed.
    ControlNotFound,
}

/// Derives the `data-test` identifier carried by a row's action control:
/// fixed prefix, then the display name lowercased with spaces hyphenated.
///
/// Must match the application's own id-generation convention exactly; a
/// divergence surfaces as `ControlNotFound`, not an error.
pub(crate) fn control_test_id(prefix: &str, name: &str) -> String {
    format!("{prefix}{}", name.to_lowercase().replace(' ', "-"))
}

/// Runs both stages against the item-name elements located by `item_names`.
pub(crate) async fn resolve_control<S: Session>(
    session: &S,
    item_names: &Locator,
    prefix: &str,
    name: &str,
) -> Result<RowResolution<S::Element>> {
    // Stage 1: first name element whose text matches exactly, then its row.
    let mut name_element = None;
    for candidate in session.find_all(item_names).await? {
        if session.text_of(&candidate).await? == name {
            name_element = Some(candidate);
            break;
        }
    }
    let Some(name_element) = name_element else {
        return Ok(RowResolution::NameNotMatched);
    };
    let Some(row) = session
        .find_within(&name_element, &Locator::xpath(ROW_ANCESTOR))
        .await?
    else {
        // Matched the name but could not ascend to a row container.
        return Ok(RowResolution::ControlNotFound);
    };

    // Stage 2: derived-identifier lookup inside that row.
    let control = Locator::css(format!(
        "button[data-test='{}']",
        control_test_id(prefix, name)
    ));
    match session.find_within(&row, &control).await? {
        Some(button) => Ok(RowResolution::Control(button)),
        None => Ok(RowResolution::ControlNotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_hyphenated_lowercase_ids() {
        assert_eq!(
            control_test_id(ADD_PREFIX, "Sauce Labs Backpack"),
            "add-to-cart-sauce-labs-backpack"
        );
        assert_eq!(
            control_test_id(REMOVE_PREFIX, "Sauce Labs Bike Light"),
            "remove-sauce-labs-bike-light"
        );
    }

    #[test]
    fn keeps_punctuation_the_application_keeps() {
        // Dots, parens, and existing hyphens pass through untouched.
        assert_eq!(
            control_test_id(ADD_PREFIX, "Test.allTheThings() T-Shirt (Red)"),
            "add-to-cart-test.allthethings()-t-shirt-(red)"
        );
    }
}
