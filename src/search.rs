//! Binary search routines over sorted entry slices.
//!
//! All routines assume `entries` is sorted by key under `cmp` and return
//! positions in `0..=entries.len()`, where `entries.len()` means "past the end".

use std::{borrow::Borrow, ops::Range};

use crate::compare::{Compare, EntryCompare};

/// First position whose key is not less than `key`
#[inline]
pub fn lower_bound<K, V, Q, C>(entries: &[(K, V)], key: &Q, cmp: EntryCompare<'_, C>) -> usize
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
{
    entries.partition_point(|entry| cmp.entry_key(entry, key))
}

/// First position whose key is greater than `key`
#[inline]
pub fn upper_bound<K, V, Q, C>(entries: &[(K, V)], key: &Q, cmp: EntryCompare<'_, C>) -> usize
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
{
    entries.partition_point(|entry| !cmp.key_entry(key, entry))
}

/// `lower_bound..upper_bound`. The upper search only scans the tail after
/// the lower bound.
#[inline]
pub fn equal_range<K, V, Q, C>(
    entries: &[(K, V)],
    key: &Q,
    cmp: EntryCompare<'_, C>,
) -> Range<usize>
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
{
    let lower = lower_bound(entries, key, cmp);
    let upper = lower + upper_bound(&entries[lower..], key, cmp);
    lower..upper
}

/// Same contract as `slice::binary_search`: `Ok(idx)` if an equivalent key is
/// stored at `idx`, otherwise `Err(idx)` with the slot that keeps order.
#[inline]
pub fn locate<K, V, Q, C>(
    entries: &[(K, V)],
    key: &Q,
    cmp: EntryCompare<'_, C>,
) -> Result<usize, usize>
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
{
    let idx = lower_bound(entries, key, cmp);
    match entries.get(idx) {
        // entry key is not less than key, so equivalent iff key is not less than it
        Some(entry) if !cmp.key_entry(key, entry) => Ok(idx),
        _ => Err(idx),
    }
}

/// Whether inserting `key` at `hint` keeps strict ascending order, i.e. the
/// entry before `hint` is less than `key` and the entry at `hint` is greater.
#[inline]
pub fn is_valid_hint<K, V, C>(
    entries: &[(K, V)],
    hint: usize,
    key: &K,
    cmp: EntryCompare<'_, C>,
) -> bool
where
    C: Compare<K>,
{
    if hint > entries.len() {
        return false;
    }

    let after_prev = match hint.checked_sub(1) {
        Some(prev) => cmp.entry_key(&entries[prev], key),
        None => true,
    };
    if !after_prev {
        return false;
    }

    match entries.get(hint) {
        Some(next) => cmp.key_entry(key, next),
        None => true,
    }
}

/// Whether the slice is strictly ascending, which covers both the ordering and
/// the uniqueness invariant.
pub fn is_strictly_sorted<K, V, C>(entries: &[(K, V)], cmp: EntryCompare<'_, C>) -> bool
where
    C: Compare<K>,
{
    entries.windows(2).all(|w| cmp.entries(&w[0], &w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{Descending, NaturalOrder};

    fn test_entries() -> Vec<(u32, ())> {
        (0..64).map(|i| ((i as u32 + 1) * 2, ())).collect()
    }

    #[test]
    fn test_locate() {
        let entries = test_entries();
        let cmp = EntryCompare::new(&NaturalOrder);

        assert_eq!(locate(&entries, &1, cmp), Err(0));
        assert_eq!(locate(&entries, &2, cmp), Ok(0));
        assert_eq!(locate(&entries, &3, cmp), Err(1));
        assert_eq!(locate(&entries, &4, cmp), Ok(1));
        assert_eq!(locate(&entries, &5, cmp), Err(2));
        assert_eq!(locate(&entries, &10, cmp), Ok(4));
        assert_eq!(locate(&entries, &128, cmp), Ok(63));
        assert_eq!(locate(&entries, &129, cmp), Err(64));
        assert_eq!(locate(&entries, &130, cmp), Err(64));
    }

    #[test]
    fn test_bounds() {
        let entries = test_entries();
        let cmp = EntryCompare::new(&NaturalOrder);

        assert_eq!(lower_bound(&entries, &2, cmp), 0);
        assert_eq!(upper_bound(&entries, &2, cmp), 1);
        assert_eq!(lower_bound(&entries, &3, cmp), 1);
        assert_eq!(upper_bound(&entries, &3, cmp), 1);
        assert_eq!(lower_bound(&entries, &200, cmp), 64);
        assert_eq!(upper_bound(&entries, &0, cmp), 0);

        assert_eq!(equal_range(&entries, &4, cmp), 1..2);
        assert_eq!(equal_range(&entries, &5, cmp), 2..2);
        assert_eq!(equal_range(&entries, &129, cmp), 64..64);
    }

    #[test]
    fn test_empty_slice() {
        let entries: Vec<(u32, ())> = vec![];
        let cmp = EntryCompare::new(&NaturalOrder);

        assert_eq!(locate(&entries, &1, cmp), Err(0));
        assert_eq!(equal_range(&entries, &1, cmp), 0..0);
        assert!(is_valid_hint(&entries, 0, &1, cmp));
        assert!(!is_valid_hint(&entries, 1, &1, cmp));
        assert!(is_strictly_sorted(&entries, cmp));
    }

    #[test]
    fn test_descending() {
        let entries = vec![(9, ()), (5, ()), (1, ())];
        let cmp = EntryCompare::new(&Descending);

        assert!(is_strictly_sorted(&entries, cmp));
        assert_eq!(locate(&entries, &5, cmp), Ok(1));
        assert_eq!(locate(&entries, &7, cmp), Err(1));
        assert_eq!(locate(&entries, &0, cmp), Err(3));
    }

    #[test]
    fn test_valid_hint() {
        let entries = vec![(10, ()), (20, ()), (30, ())];
        let cmp = EntryCompare::new(&NaturalOrder);

        assert!(is_valid_hint(&entries, 0, &5, cmp));
        assert!(is_valid_hint(&entries, 1, &15, cmp));
        assert!(is_valid_hint(&entries, 3, &35, cmp));

        // wrong slot
        assert!(!is_valid_hint(&entries, 0, &15, cmp));
        assert!(!is_valid_hint(&entries, 3, &25, cmp));
        assert!(!is_valid_hint(&entries, 2, &35, cmp));

        // equivalent key on either side
        assert!(!is_valid_hint(&entries, 1, &20, cmp));
        assert!(!is_valid_hint(&entries, 2, &20, cmp));

        // past the end
        assert!(!is_valid_hint(&entries, 4, &40, cmp));
    }

    #[test]
    fn test_strictly_sorted_rejects_duplicates() {
        let cmp = EntryCompare::new(&NaturalOrder);
        assert!(!is_strictly_sorted(&[(1, ()), (1, ())], cmp));
        assert!(!is_strictly_sorted(&[(2, ()), (1, ())], cmp));
        assert!(is_strictly_sorted(&[(1, ()), (2, ())], cmp));
    }
}
