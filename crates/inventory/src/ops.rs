//! Pure operations over the in-memory apparel collection.
//!
//! Every function here is deterministic and side-effect free; loading and
//! persisting the collection is the caller's concern.

use stockroom_core::{DomainError, DomainResult};

use crate::item::{ApparelItem, OrderLine};

/// Append `new_item` unless a record with the same `(code, size)` exists.
///
/// On a duplicate key the collection is left unchanged. Returns the created
/// record on success.
pub fn create(items: &mut Vec<ApparelItem>, new_item: ApparelItem) -> DomainResult<ApparelItem> {
    if items
        .iter()
        .any(|it| it.matches_key(&new_item.code, &new_item.size))
    {
        return Err(DomainError::duplicate_key(new_item.code, new_item.size));
    }
    items.push(new_item.clone());
    Ok(new_item)
}

/// Insert-or-replace by `(code, size)`.
///
/// An existing record has its quantity and price replaced wholesale; an
/// absent key appends a new record. Returns the record stored under the key
/// after the operation.
pub fn upsert_one(items: &mut Vec<ApparelItem>, item: ApparelItem) -> ApparelItem {
    match items
        .iter()
        .position(|it| it.matches_key(&item.code, &item.size))
    {
        Some(idx) => items[idx] = item.clone(),
        None => items.push(item.clone()),
    }
    item
}

/// Apply [`upsert_one`] for each batch entry, in order, against the same
/// evolving collection. Later entries overwrite earlier ones sharing a key.
pub fn upsert_many(items: &mut Vec<ApparelItem>, batch: Vec<ApparelItem>) {
    for item in batch {
        upsert_one(items, item);
    }
}

/// True iff every line has a matching record with at least the requested
/// quantity. Requesting exactly the stock quantity succeeds; an empty order
/// is trivially fulfillable.
///
/// Lines are checked independently against the same stock level: duplicate
/// `(code, size)` lines within one order are not summed.
pub fn can_fulfill(items: &[ApparelItem], order: &[OrderLine]) -> bool {
    order.iter().all(|line| line_is_fulfillable(items, line))
}

/// Total cost of the order, accumulating `price * quantity` per line.
///
/// The first line with no matching record or insufficient stock aborts the
/// whole computation; no partial sum is ever returned.
pub fn lowest_cost(items: &[ApparelItem], order: &[OrderLine]) -> DomainResult<f64> {
    let mut total = 0.0;
    for line in order {
        let matched = items
            .iter()
            .find(|it| it.matches_key(&line.code, &line.size))
            .filter(|it| it.quantity >= line.quantity)
            .ok_or_else(|| DomainError::unfulfillable(line.code.clone(), line.size.clone()))?;
        total += matched.price * line.quantity as f64;
    }
    Ok(total)
}

fn line_is_fulfillable(items: &[ApparelItem], line: &OrderLine) -> bool {
    items
        .iter()
        .find(|it| it.matches_key(&line.code, &line.size))
        .is_some_and(|it| it.quantity >= line.quantity)
}
