//! String-keyed hash dictionary with chained buckets.

use std::mem;

use tracing::debug;

use crate::collections::list::LinkedList;
use crate::error::Result;

/// number of buckets of a new dictionary
const INITIAL_NB_BUCKETS: usize = 17;
/// the table grows when `len / nb_buckets` reaches this value
const MAX_LOAD_FACTOR: f64 = 0.7;
/// bucket count multiplier when growing
const GROWTH_FACTOR: usize = 10;

#[derive(Debug, Clone)]
struct Entry<V> {
    key: String,
    value: V,
}

/**
hash dictionary mapping owned string keys to values.

Each bucket is a [`LinkedList`] of entries. The table grows 10× whenever the
load factor reaches 0.7 at insertion time. Values are dropped with the
dictionary; replaced and removed values are handed back to the caller.
*/
#[derive(Debug, Clone)]
pub struct Dict<V> {
    buckets: Vec<LinkedList<Entry<V>>>,
    len: usize,
}

/// rotate/xor accumulator over the key bytes
fn hash_key(key:&str, nb_buckets:usize) -> usize {
    let mut h:u64 = 0;
    for b in key.bytes() {
        h = (h << 2) ^ (h >> 14) ^ u64::from(b);
    }
    (h % nb_buckets as u64) as usize
}

/// allocates `nb_buckets` empty buckets
fn empty_table<V>(nb_buckets:usize) -> Result<Vec<LinkedList<Entry<V>>>> {
    let mut table = Vec::new();
    table.try_reserve_exact(nb_buckets)?;
    table.resize_with(nb_buckets, LinkedList::new);
    Ok(table)
}

impl<V> Dict<V> {

    /// creates an empty dictionary
    pub fn new() -> Result<Self> {
        Ok(Self { buckets: empty_table(INITIAL_NB_BUCKETS)?, len: 0 })
    }

    /// number of entries
    pub fn len(&self) -> usize { self.len }

    /// true iff the dictionary has no entry
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// current number of buckets
    pub fn nb_buckets(&self) -> usize { self.buckets.len() }

    fn load_factor(&self) -> f64 { self.len as f64 / self.buckets.len() as f64 }

    /**
    inserts a value. If the key is already present, its value is replaced and the
    previous one is returned.

    On allocation failure, the dictionary is left unchanged.
    */
    pub fn put(&mut self, key:&str, value:V) -> Result<Option<V>> {
        if self.load_factor() >= MAX_LOAD_FACTOR {
            self.grow()?;
        }
        let b = hash_key(key, self.buckets.len());
        let mut cursor = self.buckets[b].cursor_mut();
        while let Some(entry) = cursor.current_mut() {
            if entry.key == key {
                return Ok(Some(mem::replace(&mut entry.value, value)));
            }
            cursor.advance();
        }
        self.buckets[b].push_front(Entry { key: key.to_owned(), value })?;
        self.len += 1;
        Ok(None)
    }

    /// value associated to a key
    pub fn get(&self, key:&str) -> Option<&V> {
        let b = hash_key(key, self.buckets.len());
        self.buckets[b].iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    /// true iff the key is present
    pub fn contains(&self, key:&str) -> bool { self.get(key).is_some() }

    /// removes a key and returns its value
    pub fn remove(&mut self, key:&str) -> Option<V> {
        let b = hash_key(key, self.buckets.len());
        let mut cursor = self.buckets[b].cursor_mut();
        while let Some(entry) = cursor.current() {
            if entry.key == key {
                let removed = cursor.remove().map(|entry| entry.value);
                self.len -= 1;
                return removed;
            }
            cursor.advance();
        }
        None
    }

    /// iterates over the keys (bucket order)
    pub fn keys(&self) -> impl Iterator<Item=&str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// iterates over the entries (bucket order)
    pub fn iter(&self) -> impl Iterator<Item=(&str, &V)> + '_ {
        self.buckets.iter()
            .flat_map(|bucket| bucket.iter())
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    /**
    rehashes every entry into a table 10× larger.
    Every allocation is made before the first entry moves, so a failure leaves
    the current table untouched.
    */
    fn grow(&mut self) -> Result<()> {
        let nb_buckets = self.buckets.len() * GROWTH_FACTOR;
        let mut table = empty_table(nb_buckets)?;
        let mut counts:Vec<usize> = Vec::new();
        counts.try_reserve_exact(nb_buckets)?;
        counts.resize(nb_buckets, 0);
        for (key, _) in self.iter() {
            counts[hash_key(key, nb_buckets)] += 1;
        }
        for (bucket, count) in table.iter_mut().zip(counts) {
            bucket.try_reserve(count)?;
        }
        for bucket in self.buckets.iter_mut() {
            while let Some(entry) = bucket.pop_front() {
                let b = hash_key(&entry.key, nb_buckets);
                table[b].push_front(entry)?; // reserved above
            }
        }
        self.buckets = table;
        debug!(nb_buckets, len = self.len, "dictionary grown");
        Ok(())
    }
}
