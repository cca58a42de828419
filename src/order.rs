//! Order mutation - single-element relocation within the rendered order.

/// Move the element at `from` to `to`, shifting everything in between by one.
///
/// Returns `false` (and leaves `items` untouched) when there is nothing to
/// move: fewer than two items, `from == to`, or either index out of range.
pub fn relocate<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if items.len() <= 1 || from == to || from >= items.len() || to >= items.len() {
        return false;
    }

    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// Copying variant of [`relocate`] for callers that keep the previous order.
pub fn relocated<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut next = items.to_vec();
    relocate(&mut next, from, to);
    next
}
