//! Concrete page objects for the demo shop, plus the cart-mutation pipeline
//! they share.

pub mod cart;
pub mod login;
pub mod products;

pub use cart::CartPage;
pub use login::LoginPage;
pub use products::ProductsPage;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::rows::{self, RowResolution};
use crate::session::Session;
use crate::wait::{BADGE_CONVERGE_TIMEOUT, Wait};

/// Post-condition policy for cart-mutating actions.
///
/// Uniform and opt-in on every add/remove: callers that only care about the
/// click pass [`Converge::None`]; callers that define success as the UI
/// actually reflecting the mutation pass [`Converge::Badge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Converge {
    /// Report success as soon as the click lands.
    #[default]
    None,
    /// After the click, poll (bounded) until the cart badge reaches exactly
    /// the pre-click count shifted by one; report failure if it never does,
    /// even though the click itself landed.
    Badge,
}

/// Direction the badge is expected to move after a mutation.
#[derive(Debug, Clone, Copy)]
pub(crate) enum CountShift {
    Increment,
    Decrement,
}

impl CountShift {
    fn target(self, before: u32) -> u32 {
        match self {
            CountShift::Increment => before + 1,
            CountShift::Decrement => before.saturating_sub(1),
        }
    }
}

pub(crate) fn badge_locator() -> Locator {
    Locator::class_name("shopping_cart_badge")
}

/// Single-shot badge read: no wait, absence means zero.
///
/// Visible-but-non-integer text is the one fatal condition — it means the
/// application's badge contract changed underneath the suite.
pub(crate) async fn badge_count_now<S: Session>(session: &S) -> Result<u32> {
    match session.find_one(&badge_locator()).await? {
        None => Ok(0),
        Some(element) => {
            let text = session.text_of(&element).await?;
            text.trim()
                .parse()
                .map_err(|_| Error::BadgeParse { text })
        }
    }
}

/// Resolves `name` to its row action control, clicks it, and applies the
/// requested convergence policy.
///
/// Row-resolution misses and rejected clicks are expected outcomes and
/// answer `Ok(false)`; only timeouts-turned-fatal ([`Error::BadgeParse`])
/// and hard driver failures escape as errors.
pub(crate) async fn mutate_cart_row<S: Session>(
    session: &S,
    item_names: &Locator,
    name: &str,
    prefix: &str,
    shift: CountShift,
    converge: Converge,
) -> Result<bool> {
    let control = match rows::resolve_control(session, item_names, prefix, name).await? {
        RowResolution::Control(control) => control,
        RowResolution::NameNotMatched => {
            tracing::debug!(item = name, "no row matches the requested name");
            return Ok(false);
        }
        RowResolution::ControlNotFound => {
            tracing::debug!(item = name, prefix, "row matched but its control is missing");
            return Ok(false);
        }
    };

    let before = match converge {
        Converge::Badge => Some(badge_count_now(session).await?),
        Converge::None => None,
    };

    if let Err(err) = session.click(&control).await {
        tracing::debug!(item = name, error = %err, "cart control rejected the click");
        return Ok(false);
    }

    let Some(before) = before else {
        return Ok(true);
    };
    let target = shift.target(before);
    let settled = Wait::new(BADGE_CONVERGE_TIMEOUT)
        .until("cart badge to settle", || async move {
            match badge_count_now(session).await {
                Ok(count) if count == target => Ok(Some(())),
                Ok(_) => Ok(None),
                // Contract violation stays fatal even mid-poll.
                Err(err @ Error::BadgeParse { .. }) => Err(err),
                // Badge churn (e.g. removed between lookup and read) is
                // just "not settled yet".
                Err(_) => Ok(None),
            }
        })
        .await;
    match settled {
        Ok(()) => Ok(true),
        Err(Error::Timeout { .. }) => {
            tracing::debug!(item = name, target, "badge never converged after the click");
            Ok(false)
        }
        Err(other) => Err(other),
    }
}
