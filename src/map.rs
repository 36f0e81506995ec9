use std::{
    borrow::Borrow,
    collections::TryReserveError,
    fmt,
    hash::{Hash, Hasher},
    mem,
    ops::{Bound, Index, Range, RangeBounds},
    vec,
};

use crate::{
    compare::{Compare, EntryCompare, NaturalOrder},
    iterator::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut},
    search,
};

/// Ordered map backed by a sorted `Vec<(K, V)>`, with the following considerations:
///
/// 1. Lookups are binary searches over contiguous memory, iteration is a slice scan
/// 2. Keys are unique under the comparator `C`; the first inserted value for a key wins
/// 3. Insertion and removal shift the tail, so they are O(n). Batch loads should go
///    through `FromIterator` / `from_entries`, which sort once
///
/// Positions returned by `find`, `lower_bound` and friends are indices into
/// ascending order, `len()` being the past-the-end position. Any mutation
/// invalidates positions at or after the mutation point.
///
/// # Example
/// ```rust
/// use sorted_flat_map::FlatMap;
///
/// let mut map = FlatMap::<u64, (f64, f64)>::new();
///
/// // insert new value
/// assert_eq!(map.insert(3, (0., 0.)), (0, true));
///
/// // insert again does not replace
/// assert_eq!(map.insert(3, (1., 1.)), (0, false));
/// assert_eq!(map.get(&3), Some(&(0., 0.)));
///
/// // remove the value
/// assert_eq!(map.remove(&3), Some((0., 0.)));
///
/// assert!(map.is_empty());
/// ```
pub struct FlatMap<K, V, C = NaturalOrder> {
    entries: Vec<(K, V)>,
    cmp: C,
    st: Statistic,
}

impl<K, V> FlatMap<K, V> {
    /// Create an empty map ordered by `Ord`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let map = FlatMap::<i32, i32>::new();
    ///
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create an empty map with room for `capacity` entries
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }
}

impl<K, V, C> FlatMap<K, V, C> {
    /// Create an empty map ordered by `cmp`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::{Descending, FlatMap};
    ///
    /// let mut map = FlatMap::with_comparator(Descending);
    /// map.insert(1, "a");
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    ///
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
    /// ```
    #[inline]
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            entries: Vec::new(),
            cmp,
            st: Statistic::default(),
        }
    }

    #[inline]
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            cmp,
            st: Statistic::default(),
        }
    }

    /// Returns entry count in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map contains no entry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The largest entry count the backing vector can address
    #[inline]
    pub fn max_size(&self) -> usize {
        match mem::size_of::<(K, V)>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Reserve room for at least `additional` more entries. Contents and order
    /// are unchanged, positions stay valid.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.entries.reserve(additional)
    }

    /// Fallible version of `reserve`. On error the map is left untouched.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<u8, u8>::new();
    /// assert!(map.try_reserve(16).is_ok());
    /// assert!(map.try_reserve(usize::MAX).is_err());
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.entries.try_reserve(additional)
    }

    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.entries.shrink_to_fit()
    }

    /// Ascending iterator over `(&K, &V)`. Use `.rev()` for descending order.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let map = FlatMap::from([(2, 3), (1, 2)]);
    ///
    /// let kvs = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, 2), (2, 3)]);
    ///
    /// let last = map.iter().rev().next();
    /// assert_eq!(last, Some((&2, &3)));
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.entries)
    }

    /// Ascending iterator over `(&K, &mut V)`
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.entries)
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(&self.entries)
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(&self.entries)
    }

    #[inline]
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut::new(&mut self.entries)
    }

    /// Entries in ascending order
    #[inline]
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.entries
    }

    /// Consume the map and return the sorted backing vector
    #[inline]
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.entries
    }

    /// Mutable access to the raw entries, keys included.
    ///
    /// Changing keys through this slice may break ordering or uniqueness. Call
    /// [`FlatMap::arrange`] before using any lookup afterwards.
    #[inline]
    pub fn entries_mut_unordered(&mut self) -> &mut [(K, V)] {
        &mut self.entries
    }

    /// Entry at position `idx`
    #[inline]
    pub fn get_index(&self, idx: usize) -> Option<(&K, &V)> {
        self.entries.get(idx).map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn get_index_mut(&mut self, idx: usize) -> Option<(&K, &mut V)> {
        self.entries.get_mut(idx).map(|(k, v)| (&*k, v))
    }

    #[inline]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    #[inline]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entries.last().map(|(k, v)| (k, v))
    }

    /// Remove and return the entry at `idx`, shifting later entries left
    ///
    /// # Panics
    /// if `idx` is out of bounds
    pub fn remove_at(&mut self, idx: usize) -> (K, V) {
        let kv = self.entries.remove(idx);
        self.st.shifted += (self.entries.len() - idx) as u64;
        kv
    }

    /// Remove the entries in the position range and yield them in order
    ///
    /// # Panics
    /// if the range is out of bounds or decreasing, or it includes the end
    /// `usize::MAX` or excludes the start `usize::MAX`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = (0..10).map(|i| (i, i * 10)).collect::<FlatMap<_, _>>();
    /// let lo = map.lower_bound(&3);
    /// let hi = map.upper_bound(&5);
    ///
    /// let drained = map.drain(lo..hi).collect::<Vec<_>>();
    /// assert_eq!(drained, vec![(3, 30), (4, 40), (5, 50)]);
    /// assert_eq!(map.len(), 7);
    /// assert!(!map.contains_key(&4));
    /// ```
    pub fn drain<R>(&mut self, range: R) -> vec::Drain<'_, (K, V)>
    where
        R: RangeBounds<usize>,
    {
        let range = resolve_range(range, self.entries.len());
        self.st.shifted += self.entries.len().saturating_sub(range.end) as u64;
        self.entries.drain(range)
    }

    /// Remove the entries in the position range, returns how many were removed
    pub fn remove_range<R>(&mut self, range: R) -> usize
    where
        R: RangeBounds<usize>,
    {
        self.drain(range).count()
    }

    /// Keep only the entries for which `f` returns true, visiting them in
    /// ascending order
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut removed = 0;
        let mut shifted = 0u64;
        self.entries.retain_mut(|(k, v)| {
            let keep = f(&*k, v);
            if !keep {
                removed += 1;
            } else if removed > 0 {
                // kept entries behind a hole move left
                shifted += 1;
            }
            keep
        });
        self.st.shifted += shifted;
    }

    /// Remove all entries. Capacity and comparator are kept, statistics are reset.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
        self.st = Statistic::default();
    }

    /// Exchange contents and comparators with `other`. No entry is moved or copied.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut a = FlatMap::from([(1, "a")]);
    /// let mut b = FlatMap::from([(2, "b"), (3, "c")]);
    /// a.swap(&mut b);
    ///
    /// assert_eq!(a.len(), 2);
    /// assert_eq!(b.get(&1), Some(&"a"));
    /// ```
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// The key comparator
    #[inline]
    pub fn key_comp(&self) -> &C {
        &self.cmp
    }

    /// The key comparator lifted to entries
    #[inline]
    pub fn value_comp(&self) -> EntryCompare<'_, C> {
        EntryCompare::new(&self.cmp)
    }

    pub fn statistic(&self) -> &Statistic {
        &self.st
    }
}

impl<K, V, C: Compare<K>> FlatMap<K, V, C> {
    /// Build a map from unordered entries with a single sort pass.
    ///
    /// When `entries` holds equivalent keys, the first occurrence is kept, the
    /// same way repeated `insert` calls behave.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::{FlatMap, NaturalOrder};
    ///
    /// let map = FlatMap::from_entries(vec![(3, "c"), (1, "a"), (3, "x"), (2, "b")], NaturalOrder);
    ///
    /// let kvs = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, "a"), (2, "b"), (3, "c")]);
    /// ```
    pub fn from_entries(entries: Vec<(K, V)>, cmp: C) -> Self {
        let mut me = Self {
            entries,
            cmp,
            st: Statistic::default(),
        };
        me.arrange();
        me
    }

    /// Restore ordering and uniqueness after keys were changed through
    /// [`FlatMap::entries_mut_unordered`]. For equivalent keys the entry that
    /// came first is kept.
    ///
    /// The sort runs on a detached buffer. If the comparator panics the map is
    /// left empty rather than half sorted.
    pub fn arrange(&mut self) {
        let mut entries = mem::take(&mut self.entries);
        let cmp = EntryCompare::new(&self.cmp);

        // stable, so the first of each run of equivalent keys stays in front
        entries.sort_by(|a, b| cmp.ordering(a, b));
        entries.dedup_by(|later, earlier| !cmp.entries(earlier, later));

        self.entries = entries;
        self.st.rearranges += 1;

        #[cfg(test)]
        self.validate();
    }

    /// Insert a key-value pair. Returns the entry position, and whether it was
    /// inserted. An existing entry for an equivalent key is left untouched.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// assert_eq!(map.insert(2, 4), (0, true));
    /// assert_eq!(map.insert(1, 2), (0, true));
    /// assert_eq!(map.insert(2, 8), (1, false));
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map[&2], 4);
    /// ```
    pub fn insert(&mut self, k: K, v: V) -> (usize, bool) {
        match search::locate(&self.entries, &k, self.value_comp()) {
            Ok(idx) => (idx, false),
            Err(idx) => {
                self.insert_at(idx, k, v);
                (idx, true)
            }
        }
    }

    /// `insert` that reports allocation failure instead of aborting. On error
    /// the map is unchanged.
    pub fn try_insert(&mut self, k: K, v: V) -> Result<(usize, bool), TryReserveError> {
        match search::locate(&self.entries, &k, self.value_comp()) {
            Ok(idx) => Ok((idx, false)),
            Err(idx) => {
                self.entries.try_reserve(1)?;
                self.insert_at(idx, k, v);
                Ok((idx, true))
            }
        }
    }

    /// Insert with a position hint.
    ///
    /// When the entry before `hint` is less than `k` and the entry at `hint` is
    /// greater, the pair goes straight to `hint` without a search. Otherwise this
    /// is a plain [`FlatMap::insert`]. The result never depends on the hint.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::new();
    /// let mut hint = 0;
    /// for i in 0..10 {
    ///     // appending in order, the end is always the right slot
    ///     hint = map.insert_hint(hint, i, i * 2).0 + 1;
    /// }
    /// assert_eq!(map.statistic().hint_hits, 10);
    ///
    /// // a wrong hint falls back to the searched slot
    /// assert_eq!(map.insert_hint(0, 20, 40), (10, true));
    /// assert_eq!(map.insert_hint(3, 5, 0), (5, false));
    /// ```
    pub fn insert_hint(&mut self, hint: usize, k: K, v: V) -> (usize, bool) {
        if search::is_valid_hint(&self.entries, hint, &k, self.value_comp()) {
            self.st.hint_hits += 1;
            self.insert_at(hint, k, v);
            (hint, true)
        } else {
            self.st.hint_misses += 1;
            self.insert(k, v)
        }
    }

    /// Insert every pair from `iter`, one at a time
    pub fn insert_iter<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }

    /// Returns a mut reference to the value for `k`, inserting `f()` first if
    /// the key is absent.
    pub fn get_or_insert_with<F>(&mut self, k: K, f: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = match search::locate(&self.entries, &k, self.value_comp()) {
            Ok(idx) => idx,
            Err(idx) => {
                self.insert_at(idx, k, f());
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Returns a mut reference to the value for `k`, inserting `V::default()`
    /// first if the key is absent.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, String>::new();
    /// assert!(map.get_or_insert_default(5).is_empty());
    /// map.get_or_insert_default(5).push_str("five");
    ///
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&5).unwrap(), "five");
    /// ```
    pub fn get_or_insert_default(&mut self, k: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(k, V::default)
    }

    fn insert_at(&mut self, idx: usize, k: K, v: V) {
        self.st.shifted += (self.entries.len() - idx) as u64;
        self.entries.insert(idx, (k, v));

        #[cfg(test)]
        self.validate();
    }

    #[cfg(test)]
    fn validate(&self) {
        assert!(
            search::is_strictly_sorted(&self.entries, self.value_comp()),
            "entries are not strictly ascending"
        );
    }
}

impl<K, V, C> FlatMap<K, V, C> {
    /// Position of the entry for `key`, `None` if absent
    #[inline]
    pub fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        search::locate(&self.entries, key, self.value_comp()).ok()
    }

    /// 1 if the key is present, 0 otherwise
    #[inline]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).is_some() as usize
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<String, i32>::new();
    /// map.insert("one".to_string(), 1);
    ///
    /// assert_eq!(map.get("one"), Some(&1));
    /// assert!(map.get("two").is_none());
    /// ```
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).map(|idx| &self.entries[idx].1)
    }

    #[inline]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).map(|idx| &mut self.entries[idx].1)
    }

    #[inline]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.find(key).and_then(|idx| self.get_index(idx))
    }

    /// First position whose key is not less than `key`
    #[inline]
    pub fn lower_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        search::lower_bound(&self.entries, key, self.value_comp())
    }

    /// First position whose key is greater than `key`
    #[inline]
    pub fn upper_bound<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        search::upper_bound(&self.entries, key, self.value_comp())
    }

    /// Positions of entries equivalent to `key`, at most one long
    #[inline]
    pub fn equal_range<Q>(&self, key: &Q) -> Range<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        search::equal_range(&self.entries, key, self.value_comp())
    }

    /// Positions of the entries whose keys fall in `range`, empty when the
    /// range is decreasing
    pub fn range_positions<Q, R>(&self, range: R) -> Range<usize>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        let start = match range.start_bound() {
            Bound::Included(q) => self.lower_bound(q),
            Bound::Excluded(q) => self.upper_bound(q),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(q) => self.upper_bound(q),
            Bound::Excluded(q) => self.lower_bound(q),
            Bound::Unbounded => self.entries.len(),
        };
        start..end.max(start)
    }

    /// Iterate the entries whose keys fall in `range`.
    ///
    /// A decreasing range yields nothing.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let map = (0..10).map(|i| (i, i)).collect::<FlatMap<i32, i32>>();
    /// let keys = map.range(3..=5).map(|(k, _)| *k).collect::<Vec<_>>();
    /// assert_eq!(keys, vec![3, 4, 5]);
    ///
    /// assert_eq!(map.range(8..).count(), 2);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Iter<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        let positions = self.range_positions(range);
        Iter::new(&self.entries[positions])
    }

    pub fn range_mut<Q, R>(&mut self, range: R) -> IterMut<'_, K, V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        let positions = self.range_positions(range);
        IterMut::new(&mut self.entries[positions])
    }

    /// Removes a key from the map, returning the value if the key was present.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, i32>::new();
    /// map.insert(1, 2);
    ///
    /// assert!(map.remove(&1).is_some());
    /// assert!(map.remove(&2).is_none());
    /// ```
    #[inline]
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        let idx = self.find(key)?;
        Some(self.remove_at(idx))
    }

    /// Remove the entry for `key`, returns how many entries were removed (0 or 1)
    #[inline]
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.remove_entry(key).is_some() as usize
    }
}

fn resolve_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to drain from after maximum usize")),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&e) => e
            .checked_add(1)
            .unwrap_or_else(|| panic!("attempted to drain up to maximum usize")),
        Bound::Excluded(&e) => e,
        Bound::Unbounded => len,
    };
    start..end
}

/// Statistic data used to guide the perf tuning
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Statistic {
    /// inserts placed directly at a correct hint
    pub hint_hits: u64,
    /// hinted inserts that fell back to a search
    pub hint_misses: u64,
    /// full sort passes
    pub rearranges: u64,
    /// entries moved by inserts and removals
    pub shifted: u64,
}

impl<K, V, C: Default> Default for FlatMap<K, V, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for FlatMap<K, V, C> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            cmp: self.cmp.clone(),
            st: self.st.clone(),
        }
    }

    /// Builds the full copy before touching `self`, so a panicking `clone`
    /// leaves `self` as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for FlatMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for FlatMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq, V: Eq, C> Eq for FlatMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for FlatMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state)
    }
}

impl<K, V, C, Q> Index<&Q> for FlatMap<K, V, C>
where
    Q: ?Sized,
    K: Borrow<Q>,
    C: Compare<Q>,
{
    type Output = V;

    /// # Panics
    /// if the key is not present
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K, V, C: Compare<K> + Default> FromIterator<(K, V)> for FlatMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_entries(iter.into_iter().collect(), C::default())
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for FlatMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        Self::from_entries(Vec::from(arr), NaturalOrder)
    }
}

impl<K, V, C: Compare<K>> Extend<(K, V)> for FlatMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.insert_iter(iter)
    }
}

impl<K, V, C> IntoIterator for FlatMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries)
    }
}

impl<'a, K, V, C> IntoIterator for &'a FlatMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut FlatMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// ensure FlatMap is send for send k, v
fn _ensure_send<K: Send, V: Send>() {
    fn _assert_send<T: Send>() {}
    _assert_send::<FlatMap<K, V>>();
}
