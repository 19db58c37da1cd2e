//! Origin allow-list.

use std::collections::HashSet;

/// Allow-list entry that permits every origin.
pub const WILDCARD: &str = "*";

/// Immutable set of origins permitted to use the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList {
    origins: HashSet<String>,
    wildcard: bool,
}

impl AllowList {
    /// Build an allow-list from configured entries.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins: HashSet<String> = entries.into_iter().map(Into::into).collect();
        let wildcard = origins.contains(WILDCARD);
        Self { origins, wildcard }
    }

    /// An allow-list that permits every origin.
    pub fn any() -> Self {
        Self::new([WILDCARD])
    }

    /// Whether the list contains the wildcard entry.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Whether a caller presenting `origin` may use the relay.
    ///
    /// An empty origin is always allowed.
    pub fn is_allowed(&self, origin: &str) -> bool {
        origin.is_empty() || self.wildcard || self.origins.contains(origin)
    }

    /// Value to answer in `Access-Control-Allow-Origin`.
    ///
    /// The wildcard when the list has one, otherwise the caller's origin verbatim.
    pub fn allow_origin_value<'a>(&self, origin: &'a str) -> &'a str {
        if self.wildcard {
            WILDCARD
        } else {
            origin
        }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}
