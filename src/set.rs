use std::{borrow::Borrow, fmt, ops::RangeBounds};

use crate::{
    compare::{Compare, NaturalOrder},
    iterator::Keys,
    FlatMap,
};

/// Ordered set stored as a sorted vector, a key only `FlatMap`
pub struct FlatSet<K, C = NaturalOrder> {
    map: FlatMap<K, (), C>,
}

impl<K> FlatSet<K> {
    /// Create a new FlatSet
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatSet;
    ///
    /// let mut set = FlatSet::<i32>::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Self {
        Self { map: FlatMap::new() }
    }
}

impl<K, C> FlatSet<K, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            map: FlatMap::with_comparator(cmp),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Ascending iterator over the keys
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.map.keys()
    }

    pub fn first(&self) -> Option<&K> {
        self.map.first_key_value().map(|(k, _)| k)
    }

    pub fn last(&self) -> Option<&K> {
        self.map.last_key_value().map(|(k, _)| k)
    }

    pub fn clear(&mut self) {
        self.map.clear()
    }
}

impl<K, C: Compare<K>> FlatSet<K, C> {
    /// Insert a key into the set
    /// Returns true if the key was inserted, false if it already existed
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatSet;
    ///
    /// let mut set = FlatSet::<i32>::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// ```
    pub fn insert(&mut self, k: K) -> bool {
        self.map.insert(k, ()).1
    }

    /// Remove a key from the set
    /// Returns true if the key was removed, false if it didn't exist
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatSet;
    ///
    /// let mut set = FlatSet::<i32>::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&2));
    /// ```
    pub fn remove<Q>(&mut self, k: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.map.erase(k) == 1
    }

    pub fn contains<Q>(&self, k: &Q) -> bool
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.map.contains_key(k)
    }

    /// Position of the first key not less than `k`
    pub fn lower_bound<Q>(&self, k: &Q) -> usize
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
    {
        self.map.lower_bound(k)
    }

    /// Iterate the keys inside `range`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_flat_map::FlatSet;
    ///
    /// let set = (0..10).collect::<FlatSet<i32>>();
    /// let keys = set.range(4..7).copied().collect::<Vec<_>>();
    /// assert_eq!(keys, vec![4, 5, 6]);
    /// ```
    pub fn range<Q, R>(&self, range: R) -> Keys<'_, K, ()>
    where
        Q: ?Sized,
        K: Borrow<Q>,
        C: Compare<Q>,
        R: RangeBounds<Q>,
    {
        let positions = self.map.range_positions(range);
        Keys::new(&self.map.as_slice()[positions])
    }
}

impl<K, C: Default> Default for FlatSet<K, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, C: Clone> Clone for FlatSet<K, C> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<K: PartialEq, C> PartialEq for FlatSet<K, C> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K: Eq, C> Eq for FlatSet<K, C> {}

impl<K: fmt::Debug, C> fmt::Debug for FlatSet<K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, C: Compare<K> + Default> FromIterator<K> for FlatSet<K, C> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|k| (k, ())).collect(),
        }
    }
}

impl<K, C: Compare<K>> Extend<K> for FlatSet<K, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.map.insert_iter(iter.into_iter().map(|k| (k, ())))
    }
}

impl<'a, K, C> IntoIterator for &'a FlatSet<K, C> {
    type Item = &'a K;
    type IntoIter = Keys<'a, K, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
