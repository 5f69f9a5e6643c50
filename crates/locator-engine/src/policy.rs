use serde::{Deserialize, Serialize};

/// Resolution defaults shared by every call made through a [`Resolver`](crate::Resolver).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// Match elements hidden from assistive technology
    pub include_hidden: bool,
    /// Upper bound on candidate names/values listed in a failure message
    pub max_listed_candidates: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            include_hidden: false,
            max_listed_candidates: 5,
        }
    }
}
