use std::{fmt, marker::PhantomData};

use serde::{
    de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor},
    ser::{Serialize, SerializeMap, SerializeSeq, Serializer},
};

use crate::{Compare, FlatMap, FlatSet};

/// Upper bound for preallocation driven by an untrusted size hint
const MAX_PREALLOC: usize = 4096;

impl<K: Serialize, V: Serialize, C> Serialize for FlatMap<K, V, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct FlatMapVisitor<K, V, C> {
    marker: PhantomData<fn() -> FlatMap<K, V, C>>,
}

impl<'de, K, V, C> Visitor<'de> for FlatMapVisitor<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
{
    type Value = FlatMap<K, V, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut entries = Vec::with_capacity(capacity);
        while let Some(kv) = access.next_entry()? {
            entries.push(kv);
        }
        // duplicated keys keep the first occurrence
        Ok(FlatMap::from_entries(entries, C::default()))
    }
}

impl<'de, K, V, C> Deserialize<'de> for FlatMap<K, V, C>
where
    K: Deserialize<'de>,
    V: Deserialize<'de>,
    C: Compare<K> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(FlatMapVisitor {
            marker: PhantomData,
        })
    }
}

impl<K: Serialize, C> Serialize for FlatSet<K, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for k in self {
            seq.serialize_element(k)?;
        }
        seq.end()
    }
}

struct FlatSetVisitor<K, C> {
    marker: PhantomData<fn() -> FlatSet<K, C>>,
}

impl<'de, K, C> Visitor<'de> for FlatSetVisitor<K, C>
where
    K: Deserialize<'de>,
    C: Compare<K> + Default,
{
    type Value = FlatSet<K, C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let capacity = access.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut keys = Vec::with_capacity(capacity);
        while let Some(k) = access.next_element()? {
            keys.push(k);
        }
        Ok(keys.into_iter().collect())
    }
}

impl<'de, K, C> Deserialize<'de> for FlatSet<K, C>
where
    K: Deserialize<'de>,
    C: Compare<K> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(FlatSetVisitor {
            marker: PhantomData,
        })
    }
}
