/// Compute effective limit with precedence: global flag -> configured default.
///
/// Zero means unlimited.
#[must_use]
pub fn effective_limit(global: Option<u32>, configured: u32) -> Option<usize> {
    match global.unwrap_or(configured) {
        0 => None,
        limit => usize::try_from(limit).ok(),
    }
}

/// First `limit` items of `items`, or all of them.
#[must_use]
pub fn take_limited<T>(items: &[T], limit: Option<usize>) -> &[T] {
    limit.map_or(items, |limit| &items[..items.len().min(limit)])
}
