//! Failure messages built from [`NotFound`] metadata

use std::collections::BTreeSet;

use crate::model::SemanticLocator;
use crate::policy::ResolveOptions;
use crate::tree::AccessibilityTree;
use crate::types::{Missing, NotFound, Resolution};

/// Human-readable explanation of why `locator` matched nothing.
///
/// `hidden` is the result of the same locator resolved with hidden elements
/// included; when it found something the message says so.
pub fn failure_message<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &SemanticLocator,
    failure: &NotFound<T::Node>,
    hidden: Option<&Resolution<T::Node>>,
    options: &ResolveOptions,
) -> String {
    let mut parts = vec![
        format!("Didn't find any elements matching semantic locator `{locator}`."),
        describe_failure(tree, locator, failure, options),
    ];

    if let Some(Resolution::Found { elements }) = hidden {
        parts.push(format!(
            "{} matching element(s) exist but are hidden from assistive technology; \
             pass include_hidden to match them.",
            elements.len()
        ));
    }

    parts.join(" ")
}

/// Explain the failing predicate, without the header line
pub fn describe_failure<T: AccessibilityTree + ?Sized>(
    tree: &T,
    locator: &SemanticLocator,
    failure: &NotFound<T::Node>,
    options: &ResolveOptions,
) -> String {
    let candidates = failure.elements_found.len();
    let scope = outer_scope(locator, failure);

    match &failure.not_found {
        Missing::Role(role) if failure.closest_find.is_empty() => {
            format!("No elements have role `{role}`.")
        }
        Missing::Role(role)
            if scope.is_some() && failure.closest_find.len() == locator.pre_outer.len() =>
        {
            format!(
                "None of the elements matching `{}` contain an element with role `{role}`.",
                leading(locator)
            )
        }
        Missing::Role(role) => format!(
            "{}`{}` matched {candidates} element(s), but none of them contain an element with role `{role}`.",
            scope.unwrap_or_default(),
            progress(locator, failure)
        ),
        Missing::Attribute(attribute) => {
            let values = distinct(
                failure.elements_found.iter().map(|node| {
                    tree.attribute_value(node, &attribute.name)
                        .map(|value| format!("`{value}`"))
                        .unwrap_or_else(|| "(absent)".to_string())
                }),
                options.max_listed_candidates,
            );
            format!(
                "{}`{}` matched {candidates} element(s), but none have `{attribute}`. Values of `{}` found: {values}.",
                scope.unwrap_or_default(),
                progress(locator, failure),
                attribute.name
            )
        }
        Missing::Name(name) => {
            let names = distinct(
                failure
                    .elements_found
                    .iter()
                    .map(|node| format!("'{}'", tree.accessible_name(node))),
                options.max_listed_candidates,
            );
            format!(
                "{}`{}` matched {candidates} element(s), but none have an accessible name matching {name}. Accessible names found: {names}.",
                scope.unwrap_or_default(),
                progress(locator, failure)
            )
        }
    }
}

/// Lead-in for failures inside the `outer` part, whose candidates come from a
/// single element of the leading part rather than all of them
fn outer_scope<N>(locator: &SemanticLocator, failure: &NotFound<N>) -> Option<String> {
    (locator.has_outer() && failure.closest_find.len() >= locator.pre_outer.len()).then(|| {
        format!(
            "Within the closest-matching `{}` element, ",
            leading(locator)
        )
    })
}

fn leading(locator: &SemanticLocator) -> String {
    locator
        .pre_outer
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The matched prefix of the locator, including the matched part of the failing node
fn progress<N>(locator: &SemanticLocator, failure: &NotFound<N>) -> String {
    let mut rendered: Vec<String> = failure
        .closest_find
        .iter()
        .map(ToString::to_string)
        .collect();
    if let Some(partial) = &failure.partial_find {
        rendered.push(partial.as_node().to_string());
    }
    locator.join_rendered(&rendered)
}

fn distinct(values: impl Iterator<Item = String>, limit: usize) -> String {
    let unique: BTreeSet<String> = values.collect();
    let total = unique.len();
    let mut listed: Vec<String> = unique.into_iter().take(limit).collect();
    if total > listed.len() {
        listed.push(format!("and {} more", total - listed.len()));
    }
    listed.join(", ")
}
