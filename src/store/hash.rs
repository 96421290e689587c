use std::collections::HashMap;

use bytes::Bytes;

use super::{Store, StoreError, Value};

impl Store {
    /// Sets `field` in the hash at `key`, creating the hash when absent.
    /// Returns 1 when the field is new, 0 when it was overwritten.
    pub fn hset(&self, key: &str, field: String, value: Bytes) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let entry = shard
            .entry(key.to_string())
            .or_insert_with(|| Value::Hash(HashMap::new()));

        match entry {
            Value::Hash(hash) => match hash.insert(field, value) {
                Some(_) => Ok(0),
                None => Ok(1),
            },
            _ => Err(StoreError::WrongType),
        }
    }

    pub fn hget(&self, key: &str, field: &str) -> Result<Option<Bytes>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::Hash(hash)) => Ok(hash.get(field).cloned()),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Deletes fields, returning how many existed. A drained hash is
    /// removed from the keyspace.
    pub fn hdel(&self, key: &str, fields: &[String]) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let (removed, drained) = match shard.get_mut(key) {
            None => return Ok(0),
            Some(Value::Hash(hash)) => {
                let mut removed = 0;
                for field in fields {
                    if hash.remove(field).is_some() {
                        removed += 1;
                    }
                }
                (removed, hash.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(removed)
    }

    pub fn hexists(&self, key: &str, field: &str) -> Result<bool, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(false),
            Some(Value::Hash(hash)) => Ok(hash.contains_key(field)),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn hlen(&self, key: &str) -> Result<i64, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(0),
            Some(Value::Hash(hash)) => Ok(hash.len() as i64),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// All field/value pairs, in no particular order.
    pub fn hgetall(&self, key: &str) -> Result<Vec<(String, Bytes)>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Hash(hash)) => Ok(hash
                .iter()
                .map(|(field, value)| (field.clone(), value.clone()))
                .collect()),
            Some(_) => Err(StoreError::WrongType),
        }
    }
}
