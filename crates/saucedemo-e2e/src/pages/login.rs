//! Login page object: credential entry and error-message retrieval.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;
use crate::locator::Locator;
use crate::page::PageObject;
use crate::session::Session;
use crate::wait::DEFAULT_TIMEOUT;

/// Page object for the demo shop's login form.
pub struct LoginPage<'s, S: Session> {
    session: &'s S,
    timeout: Duration,
}

impl<'s, S: Session> LoginPage<'s, S> {
    /// Entry URL.
    pub const URL: &'static str = "https://www.saucedemo.com/";

    fn username_input() -> Locator {
        Locator::id("user-name")
    }

    fn password_input() -> Locator {
        Locator::id("password")
    }

    fn login_button() -> Locator {
        Locator::id("login-button")
    }

    fn error_region() -> Locator {
        Locator::css("h3[data-test='error']")
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

    /// Navigates to the login form. Fire-and-forget: the caller asserts the
    /// resulting state.
    pub async fn load(&self) -> Result<()> {
        self.session.navigate(Self::URL).await
    }

    /// Types the credentials and submits, in that fixed order.
    ///
    /// Does not wait for the resulting transition; assert the post-condition
    /// via [`LoginPage::error_message`] or the session URL.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        self.type_text(&Self::username_input(), username).await?;
        self.type_text(&Self::password_input(), password).await?;
        self.click(&Self::login_button()).await
    }

    /// The login error text, or `None` when no error region appears within
    /// the page timeout — absence is a valid outcome meaning login
    /// succeeded, not a failure.
    pub async fn error_message(&self) -> Result<Option<String>> {
        if self.is_visible(&Self::error_region()).await {
            let element = self.find(&Self::error_region()).await?;
            Ok(Some(self.session.text_of(&element).await?))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl<S: Session> PageObject<S> for LoginPage<'_, S> {
    fn session(&self) -> &S {
        self.session
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}
