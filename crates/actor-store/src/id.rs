//! Id generation for created entities.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

/// Returns a generator of timestamp-derived ids.
///
/// Each id is the current Unix time in milliseconds, bumped past the previous
/// id when two requests land in the same millisecond. Ids are therefore unique
/// for the lifetime of the generator and increase in creation order.
pub fn timestamp_ids<Id: From<String>>() -> impl Fn() -> Id + Send + Sync + 'static {
    let last = Arc::new(AtomicI64::new(0));
    move || {
        let now = chrono::Utc::now().timestamp_millis();
        let mut prev = last.load(Ordering::SeqCst);
        loop {
            let next = now.max(prev + 1);
            match last.compare_exchange(prev, next, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => return Id::from(next.to_string()),
                Err(actual) => prev = actual,
            }
        }
    }
}

/// Returns a generator of sequential ids of the form `{prefix}_{n}`.
pub fn sequential_ids<Id: From<String>>(
    prefix: &'static str,
) -> impl Fn() -> Id + Send + Sync + 'static {
    let counter = Arc::new(std::sync::atomic::AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        Id::from(format!("{prefix}_{id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_timestamp_ids_are_unique_and_increasing() {
        let next = timestamp_ids::<String>();
        let ids: Vec<i64> = (0..500).map(|_| next().parse().unwrap()).collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sequential_ids() {
        let next = sequential_ids::<String>("order");
        assert_eq!(next(), "order_1");
        assert_eq!(next(), "order_2");
    }
}
