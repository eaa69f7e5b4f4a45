//! Single-default maintenance for saved addresses and payment methods.
//!
//! Every collection that offers a checkout pre-selection keeps at most one
//! item flagged as default. The functions here are pure: they borrow the
//! caller's slice and return a new `Vec`, leaving the input untouched.

use crate::domain::ItemId;
use crate::error::{CollectionError, CollectionResult};

/// An item that can be the default of its collection.
pub trait DefaultFlagged {
    fn id(&self) -> &ItemId;
    fn is_default(&self) -> bool;
    fn set_default(&mut self, is_default: bool);
}

/// Number of items flagged as default.
pub fn default_count<T: DefaultFlagged>(items: &[T]) -> usize {
    items.iter().filter(|item| item.is_default()).count()
}

/// The current default item, if any.
pub fn default_item<T: DefaultFlagged>(items: &[T]) -> Option<&T> {
    items.iter().find(|item| item.is_default())
}

/// Item to pre-select at checkout.
///
/// Returns `Ok(None)` when items exist but none is default; no item is
/// promoted implicitly.
pub fn preselect<T: DefaultFlagged>(items: &[T]) -> CollectionResult<Option<&T>> {
    if items.is_empty() {
        return Err(CollectionError::EmptyCollection);
    }
    Ok(default_item(items))
}

/// Make `target` the only default, preserving order and length.
///
/// # Errors
///
/// `NotFound` if no item has `target` as id, including when `items` is empty.
pub fn promote<T>(items: &[T], target: &ItemId) -> CollectionResult<Vec<T>>
where
    T: DefaultFlagged + Clone,
{
    if !items.iter().any(|item| item.id() == target) {
        return Err(CollectionError::NotFound(target.to_string()));
    }

    Ok(items
        .iter()
        .cloned()
        .map(|mut item| {
            let is_target = item.id() == target;
            item.set_default(is_target);
            item
        })
        .collect())
}

/// Remove `target`. If it was the default the result has no default.
///
/// # Errors
///
/// `NotFound` if no item has `target` as id.
pub fn remove_and_reconcile<T>(items: &[T], target: &ItemId) -> CollectionResult<Vec<T>>
where
    T: DefaultFlagged + Clone,
{
    let position = items
        .iter()
        .position(|item| item.id() == target)
        .ok_or_else(|| CollectionError::NotFound(target.to_string()))?;

    let mut remaining = items.to_vec();
    remaining.remove(position);
    Ok(remaining)
}

/// Replace the item with the same id in place, or append it.
///
/// A default incoming item clears every other flag. A non-default one leaves
/// the other items as they were, so `items` must already hold at most one
/// default; run [`enforce_single_default`] first on data of unknown origin.
pub fn upsert<T>(items: &[T], item: T) -> Vec<T>
where
    T: DefaultFlagged + Clone,
{
    let target = item.id().clone();
    let promote_incoming = item.is_default();
    let mut result = items.to_vec();

    match result.iter().position(|existing| existing.id() == &target) {
        Some(position) => result[position] = item,
        None => result.push(item),
    }

    if promote_incoming {
        for existing in result.iter_mut() {
            let is_target = existing.id() == &target;
            existing.set_default(is_target);
        }
    }

    result
}

/// Repair a collection that has more than one default.
///
/// The first default wins and later flags are cleared. Collections that
/// already satisfy the invariant come back unchanged.
pub fn enforce_single_default<T>(items: &[T]) -> Vec<T>
where
    T: DefaultFlagged + Clone,
{
    let mut seen_default = false;
    let mut cleared = Vec::new();

    let result = items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.is_default() {
                if seen_default {
                    cleared.push(item.id().to_string());
                    item.set_default(false);
                }
                seen_default = true;
            }
            item
        })
        .collect();

    if !cleared.is_empty() {
        tracing::warn!(cleared = ?cleared, "Collection had more than one default item");
    }

    result
}
