//! LRU Cache Module
//!
//! Implements a bounded key-value store with least-recently-used eviction.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{RangeCacheError, Result};

/// Null link in the recency list.
const NIL: usize = usize::MAX;

#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Next more recently used slot
    prev: usize,
    /// Next less recently used slot
    next: usize,
}

// == LRU Cache ==
/// Capacity-bounded cache with O(1) get, put and delete.
///
/// Entries live in a slot arena linked into a doubly-linked recency list:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// A `HashMap` maps each key to its slot. Freed slots are recycled.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Maximum number of entries
    capacity: usize,
    /// Key to slot index
    map: HashMap<K, usize>,
    /// Slot arena
    slots: Vec<Option<Node<K, V>>>,
    /// Recycled slot indices
    free: Vec<usize>,
    head: usize,
    tail: usize,
}

impl<K: Hash + Eq + Clone, V> LruCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(RangeCacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: NIL,
            tail: NIL,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// `None` is the miss signal, so every `V` is a legitimate cached value.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.node(idx).map(|node| &node.value)
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.node(idx).map(|node| &node.value)
    }

    // == Put ==
    /// Inserts or overwrites `key`, marking it most recently used.
    ///
    /// When an insert pushes the size past capacity, the least recently
    /// used entry is evicted and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = self.slots[idx].as_mut() {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let idx = self.alloc(Node {
            key: key.clone(),
            value,
            prev: NIL,
            next: NIL,
        });
        self.push_front(idx);
        self.map.insert(key, idx);

        if self.map.len() > self.capacity {
            self.pop_lru()
        } else {
            None
        }
    }

    // == Delete ==
    /// Removes `key` and returns its value. No-op when absent.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.release(idx).map(|node| node.value)
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        if self.tail == NIL {
            return None;
        }

        let node = self.release(self.tail)?;
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    // == Peek LRU ==
    /// Returns the least recently used key without removing it.
    pub fn peek_lru(&self) -> Option<&K> {
        self.node(self.tail).map(|node| &node.key)
    }

    // == Keys ==
    /// Returns a snapshot of the present keys, most recently used first.
    ///
    /// The snapshot is owned, so callers may delete from the cache while
    /// walking it.
    pub fn keys(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.map.len());
        let mut cursor = self.head;
        while let Some(node) = self.node(cursor) {
            keys.push(node.key.clone());
            cursor = node.next;
        }
        keys
    }

    // == Contains ==
    /// Checks if a key is present without touching recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.free.clear();
        self.head = NIL;
        self.tail = NIL;
    }

    // == Recency List ==

    fn node(&self, idx: usize) -> Option<&Node<K, V>> {
        self.slots.get(idx).and_then(Option::as_ref)
    }

    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Unlinks a slot and hands its node back. The map is left untouched.
    fn release(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.unlink(idx);
        let node = self.slots.get_mut(idx)?.take()?;
        self.free.push(idx);
        Some(node)
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match self.node(idx) {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match self.slots.get_mut(prev).and_then(Option::as_mut) {
            Some(node) => node.next = next,
            None => self.head = next,
        }
        match self.slots.get_mut(next).and_then(Option::as_mut) {
            Some(node) => node.prev = prev,
            None => self.tail = prev,
        }

        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = NIL;
            node.next = NIL;
        }
    }

    fn push_front(&mut self, idx: usize) {
        let old_head = self.head;
        if let Some(node) = self.slots[idx].as_mut() {
            node.prev = NIL;
            node.next = old_head;
        }

        match self.slots.get_mut(old_head).and_then(Option::as_mut) {
            Some(node) => node.prev = idx,
            None => self.tail = idx,
        }
        self.head = idx;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }
}
