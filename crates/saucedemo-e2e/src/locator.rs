//! Locator model: an opaque (strategy, value) pair describing how to find
//! one element in a page. Each page object owns a static table of these.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lookup strategy for a [`Locator`], mirroring the WebDriver location
/// strategies the demo shop's pages are addressed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// `id` attribute
    Id,
    /// Single class name
    ClassName,
    /// CSS selector
    Css,
    /// XPath expression (absolute, or relative when scoped to an element)
    XPath,
}

impl Strategy {
    fn as_str(&self) -> &'static str {
        match self {
            Strategy::Id => "id",
            Strategy::ClassName => "class",
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
        }
    }
}

/// How to find one element in a page structure.
///
/// Locators are immutable and cheap to build; pages construct them on demand
/// rather than caching element handles, so a re-render never leaves a page
/// object holding a dead reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    pub strategy: Strategy,
    pub value: String,
}

impl Locator {
    /// Locator for an `id` attribute value.
    pub fn id(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Id,
            value: value.into(),
        }
    }

    /// Locator for a single class name.
    pub fn class_name(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::ClassName,
            value: value.into(),
        }
    }

    /// Locator for a CSS selector.
    pub fn css(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            value: value.into(),
        }
    }

    /// Locator for an XPath expression.
    pub fn xpath(value: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            value: value.into(),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy.as_str(), self.value)
    }
}
