mod hash;
mod list;
mod set;
pub mod value;
mod zset;

pub use list::ListEnd;
pub use value::{Value, ZSet};

use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use bytes::Bytes;
use parking_lot::RwLock;
use thiserror::Error as ThisError;

const SHARD_COUNT: usize = 16;

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum StoreError {
    #[error("WRONGTYPE Operation against a key holding the wrong kind of value")]
    WrongType,
    #[error("ERR value is not an integer or out of range")]
    NotAnInteger,
    #[error("ERR no such key")]
    NoSuchKey,
    #[error("ERR index out of range")]
    IndexOutOfRange,
}

type Shard = RwLock<HashMap<String, Value>>;

/// The process-wide keyspace: a `HashMap<String, Value>` split across a
/// fixed number of independently locked shards. Cloning hands out another
/// handle to the same shards.
///
/// Operations on the same key serialize on that key's shard lock; keys on
/// different shards proceed in parallel. Every operator that can drain a
/// collection removes the emptied key under the same write guard, so an
/// emptiness check can never race a concurrent insert reviving the key.
#[derive(Clone)]
pub struct Store {
    shards: Arc<Vec<Shard>>,
}

impl Store {
    pub fn new() -> Store {
        let mut shards = Vec::with_capacity(SHARD_COUNT);
        for _ in 0..SHARD_COUNT {
            shards.push(RwLock::new(HashMap::new()));
        }
        Store {
            shards: Arc::new(shards),
        }
    }

    fn shard(&self, key: &str) -> &Shard {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        &self.shards[(hasher.finish() as usize) % self.shards.len()]
    }

    /// Stores a string value, replacing whatever shape the key held before.
    pub fn set(&self, key: String, value: Bytes) {
        self.shard(&key).write().insert(key, Value::String(value));
    }

    /// Returns the string stored at `key`. A key holding any other shape
    /// reads as absent.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            Some(Value::String(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    pub fn del(&self, keys: &[String]) -> i64 {
        let mut count = 0;
        for key in keys {
            if self.shard(key).write().remove(key).is_some() {
                count += 1;
            }
        }
        count
    }

    pub fn exists(&self, keys: &[String]) -> i64 {
        let mut count = 0;
        for key in keys {
            if self.shard(key).read().contains_key(key) {
                count += 1;
            }
        }
        count
    }

    /// Adds `delta` to the integer stored at `key`, treating an absent key
    /// as 0, and stores the result back as decimal text. Arithmetic is
    /// checked; overflow fails instead of wrapping.
    pub fn incr_by(&self, key: &str, delta: i64) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let current = match shard.get(key) {
            None => 0,
            Some(Value::String(bytes)) => std::str::from_utf8(bytes)
                .ok()
                .and_then(|s| s.parse::<i64>().ok())
                .ok_or(StoreError::NotAnInteger)?,
            Some(_) => return Err(StoreError::WrongType),
        };

        let next = current.checked_add(delta).ok_or(StoreError::NotAnInteger)?;
        shard.insert(key.to_string(), Value::String(Bytes::from(next.to_string())));
        Ok(next)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a possibly negative index into `0..len`, or `None` when it falls
/// outside the sequence.
fn normalize_index(len: usize, index: i64) -> Option<usize> {
    let len = len as i64;
    let index = if index < 0 { len + index } else { index };
    if index < 0 || index >= len {
        return None;
    }
    Some(index as usize)
}

/// Clamps an inclusive, negative-friendly `[start, stop]` pair against
/// `len`. `None` means the resulting range is empty.
fn normalize_range(len: usize, start: i64, stop: i64) -> Option<(usize, usize)> {
    let len = len as i64;
    let mut start = if start < 0 { len + start } else { start };
    let mut stop = if stop < 0 { len + stop } else { stop };

    if start < 0 {
        start = 0;
    }
    if stop >= len {
        stop = len - 1;
    }
    if len == 0 || start > stop || start >= len {
        return None;
    }
    Some((start as usize, stop as usize))
}
