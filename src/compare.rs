use std::{borrow::Borrow, cmp::Ordering, fmt};

/// A strict weak ordering over `T`.
///
/// `less(a, b)` returns true when `a` is ordered before `b`. Two values are
/// equivalent when neither is ordered before the other.
pub trait Compare<T: ?Sized> {
    fn less(&self, a: &T, b: &T) -> bool;

    /// Three way result derived from `less`
    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        if self.less(a, b) {
            Ordering::Less
        } else if self.less(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// Ascending order by `Ord`. This is the default comparator.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: ?Sized + Ord> Compare<T> for NaturalOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }

    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order by `Ord`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descending;

impl<T: ?Sized + Ord> Compare<T> for Descending {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }

    #[inline]
    fn ordering(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Comparator built from a "less than" closure.
///
/// # Examples
/// ```rust
/// use sorted_flat_map::{FlatMap, FnCompare};
///
/// // order by length first, then lexicographically
/// let cmp = FnCompare(|a: &&str, b: &&str| (a.len(), *a) < (b.len(), *b));
/// let mut map = FlatMap::with_comparator(cmp);
/// map.insert("ccc", 3);
/// map.insert("a", 1);
/// map.insert("bb", 2);
///
/// let keys = map.keys().copied().collect::<Vec<_>>();
/// assert_eq!(keys, vec!["a", "bb", "ccc"]);
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(pub F);

impl<F> fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCompare")
    }
}

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Entry level view of a key comparator.
///
/// Binary search compares the probe against stored entries in both argument
/// positions, so the adapter offers all three shapes. Each one projects the
/// entry to its key and delegates to the key comparator.
pub struct EntryCompare<'a, C> {
    cmp: &'a C,
}

impl<'a, C> Clone for EntryCompare<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for EntryCompare<'a, C> {}

impl<'a, C> EntryCompare<'a, C> {
    #[inline]
    pub fn new(cmp: &'a C) -> Self {
        Self { cmp }
    }

    /// The wrapped key comparator
    #[inline]
    pub fn key_comp(&self) -> &'a C {
        self.cmp
    }

    /// (entry, entry)
    #[inline]
    pub fn entries<K, V>(&self, a: &(K, V), b: &(K, V)) -> bool
    where
        C: Compare<K>,
    {
        self.cmp.less(&a.0, &b.0)
    }

    /// (entry, key)
    #[inline]
    pub fn entry_key<K, V, Q: ?Sized>(&self, entry: &(K, V), key: &Q) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.cmp.less(entry.0.borrow(), key)
    }

    /// (key, entry)
    #[inline]
    pub fn key_entry<K, V, Q: ?Sized>(&self, key: &Q, entry: &(K, V)) -> bool
    where
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.cmp.less(key, entry.0.borrow())
    }

    /// Three way ordering of two entries, used for sorting
    #[inline]
    pub fn ordering<K, V>(&self, a: &(K, V), b: &(K, V)) -> Ordering
    where
        C: Compare<K>,
    {
        self.cmp.ordering(&a.0, &b.0)
    }
}

impl<'a, C: fmt::Debug> fmt::Debug for EntryCompare<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntryCompare").field(self.cmp).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_and_descending() {
        assert!(NaturalOrder.less(&1, &2));
        assert!(!NaturalOrder.less(&2, &2));
        assert!(NaturalOrder.equivalent(&2, &2));
        assert_eq!(NaturalOrder.ordering("a", "b"), Ordering::Less);

        assert!(Descending.less(&2, &1));
        assert!(!Descending.less(&1, &2));
        assert_eq!(Descending.ordering(&1, &2), Ordering::Greater);
    }

    #[test]
    fn test_fn_compare_equivalence() {
        // case insensitive
        let cmp = FnCompare(|a: &String, b: &String| a.to_lowercase() < b.to_lowercase());
        let a = "Hello".to_string();
        let b = "hello".to_string();
        assert!(cmp.equivalent(&a, &b));
        assert_eq!(cmp.ordering(&a, &"world".to_string()), Ordering::Less);
    }

    #[test]
    fn test_entry_compare_shapes() {
        let cmp = NaturalOrder;
        let entry_cmp = EntryCompare::new(&cmp);

        let a = (1, "a");
        let b = (2, "b");
        assert!(entry_cmp.entries(&a, &b));
        assert!(!entry_cmp.entries(&b, &a));
        assert!(entry_cmp.entry_key(&a, &2));
        assert!(!entry_cmp.entry_key(&b, &2));
        assert!(entry_cmp.key_entry(&1, &b));
        assert!(!entry_cmp.key_entry(&2, &b));
        assert_eq!(entry_cmp.ordering(&b, &a), Ordering::Greater);

        // borrowed key shape
        let s = ("k".to_string(), 0);
        assert!(entry_cmp.key_entry("a", &s));
        assert!(entry_cmp.entry_key(&s, "z"));
    }
}
