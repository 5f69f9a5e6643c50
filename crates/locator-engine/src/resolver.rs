//! Locator resolution with `outer` handling and the public entry points

use tracing::{debug, info, trace};

use crate::diagnostics::failure_message;
use crate::errors::LocatorError;
use crate::matcher::match_sequence;
use crate::model::SemanticLocator;
use crate::policy::ResolveOptions;
use crate::syntax::parse;
use crate::tree::{sort_unique, AccessibilityTree};
use crate::types::{NotFound, Resolution};

/// Resolve a parsed locator under `root`.
///
/// The `outer` part, if any, is matched separately under each element found
/// by the leading part, and the per-element results are merged.
pub fn resolve<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &SemanticLocator,
    root: &T::Node,
    include_hidden: bool,
) -> Result<Resolution<T::Node>, LocatorError> {
    let leading = match_sequence(tree, &locator.pre_outer, vec![root.clone()], include_hidden)?;
    if !locator.has_outer() {
        return Ok(leading);
    }
    match leading {
        Resolution::Found { elements } => resolve_outer(tree, locator, elements, include_hidden),
        not_found => Ok(not_found),
    }
}

fn resolve_outer<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &SemanticLocator,
    bases: Vec<T::Node>,
    include_hidden: bool,
) -> Result<Resolution<T::Node>, LocatorError> {
    let mut matched: Vec<T::Node> = Vec::new();
    let mut any_found = false;
    let mut best_failure: Option<NotFound<T::Node>> = None;

    for base in bases {
        trace!(?base, "matching outer sequence");
        match match_sequence(tree, &locator.post_outer, vec![base], include_hidden)? {
            Resolution::Found { elements } => {
                any_found = true;
                matched.extend(elements);
            }
            Resolution::NotFound(failure) => {
                let replace = best_failure
                    .as_ref()
                    .map_or(true, |best| failure.is_more_specific_than(best));
                if replace {
                    best_failure = Some(failure);
                }
            }
        }
    }

    if any_found {
        // Nested bases can reach the same element more than once, and results
        // from different bases are not interleaved in document order.
        sort_unique(tree, &mut matched);
        debug!(elements = matched.len(), "outer sequence matched");
        return Ok(Resolution::Found { elements: matched });
    }

    let mut failure = best_failure
        .ok_or_else(|| LocatorError::internal("outer resolution had no bases"))?;
    let mut closest_find = locator.pre_outer.clone();
    closest_find.append(&mut failure.closest_find);
    failure.closest_find = closest_find;
    Ok(Resolution::NotFound(failure))
}

/// All elements matching `locator` under `root`, in document order.
/// A locator that matches nothing yields an empty list.
pub fn find_all<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &str,
    root: &T::Node,
    include_hidden: bool,
) -> Result<Vec<T::Node>, LocatorError> {
    Resolver::new(tree).find_all_with(locator, root, include_hidden)
}

/// First element matching `locator` under `root`, or
/// [`LocatorError::NoSuchElement`] with a diagnostic message.
pub fn find_first<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &str,
    root: &T::Node,
    include_hidden: bool,
) -> Result<T::Node, LocatorError> {
    Resolver::new(tree).find_first_with(locator, root, include_hidden)
}

/// Resolver bound to one tree and a set of [`ResolveOptions`]
pub struct Resolver<'t, T: AccessibilityTree + ?Sized> {
    tree: &'t T,
    options: ResolveOptions,
}

impl<'t, T: AccessibilityTree + ?Sized> Resolver<'t, T> {
    pub fn new(tree: &'t T) -> Self {
        Self::with_options(tree, ResolveOptions::default())
    }

    pub fn with_options(tree: &'t T, options: ResolveOptions) -> Self {
        Self { tree, options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    pub fn tree(&self) -> &'t T {
        self.tree
    }

    /// Resolve with structured metadata
    pub fn resolve(
        &self,
        locator: &SemanticLocator,
        root: &T::Node,
        include_hidden: bool,
    ) -> Result<Resolution<T::Node>, LocatorError> {
        resolve(self.tree, locator, root, include_hidden)
    }

    /// [`find_all_with`](Self::find_all_with) using the configured `include_hidden`
    pub fn find_all(&self, locator: &str, root: &T::Node) -> Result<Vec<T::Node>, LocatorError> {
        self.find_all_with(locator, root, self.options.include_hidden)
    }

    pub fn find_all_with(
        &self,
        locator: &str,
        root: &T::Node,
        include_hidden: bool,
    ) -> Result<Vec<T::Node>, LocatorError> {
        let parsed = parse(locator)?;
        let elements = self.resolve(&parsed, root, include_hidden)?.into_elements();
        debug!(locator = %parsed, found = elements.len(), "find_all");
        Ok(elements)
    }

    /// [`find_first_with`](Self::find_first_with) using the configured `include_hidden`
    pub fn find_first(&self, locator: &str, root: &T::Node) -> Result<T::Node, LocatorError> {
        self.find_first_with(locator, root, self.options.include_hidden)
    }

    pub fn find_first_with(
        &self,
        locator: &str,
        root: &T::Node,
        include_hidden: bool,
    ) -> Result<T::Node, LocatorError> {
        let parsed = parse(locator)?;
        let failure = match self.resolve(&parsed, root, include_hidden)? {
            Resolution::Found { elements } => {
                return elements
                    .into_iter()
                    .next()
                    .ok_or_else(|| LocatorError::internal("found an empty element list"));
            }
            Resolution::NotFound(failure) => failure,
        };

        // Only used to explain the failure; it never turns it into a success.
        let hidden = if include_hidden {
            None
        } else {
            Some(self.resolve(&parsed, root, true)?)
        };
        let message = failure_message(
            self.tree,
            &parsed,
            &failure,
            hidden.as_ref(),
            &self.options,
        );
        info!(locator = %parsed, "no element found");
        Err(LocatorError::NoSuchElement(message))
    }
}
