use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::{Store, StoreError, Value};

impl Store {
    /// Adds members, creating the set when absent. Returns how many were
    /// actually new.
    pub fn sadd(&self, key: &str, members: Vec<String>) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let entry = shard
            .entry(key.to_string())
            .or_insert_with(|| Value::Set(HashSet::new()));

        match entry {
            Value::Set(set) => {
                let mut added = 0;
                for member in members {
                    if set.insert(member) {
                        added += 1;
                    }
                }
                Ok(added)
            }
            _ => Err(StoreError::WrongType),
        }
    }

    /// Removes members, returning how many existed. A drained set is
    /// removed from the keyspace.
    pub fn srem(&self, key: &str, members: &[String]) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let (removed, drained) = match shard.get_mut(key) {
            None => return Ok(0),
            Some(Value::Set(set)) => {
                let mut removed = 0;
                for member in members {
                    if set.remove(member) {
                        removed += 1;
                    }
                }
                (removed, set.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(removed)
    }

    pub fn sismember(&self, key: &str, member: &str) -> Result<bool, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(false),
            Some(Value::Set(set)) => Ok(set.contains(member)),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn scard(&self, key: &str) -> Result<i64, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(0),
            Some(Value::Set(set)) => Ok(set.len() as i64),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn smembers(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Set(set)) => Ok(set.iter().cloned().collect()),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Removes and returns up to `count` members chosen uniformly at
    /// random. `count == 0` pops the whole set; a negative count pops
    /// nothing. A drained set is removed from the keyspace.
    pub fn spop(&self, key: &str, count: i64) -> Result<Vec<String>, StoreError> {
        let mut shard = self.shard(key).write();
        let (popped, drained) = match shard.get_mut(key) {
            None => return Ok(Vec::new()),
            Some(Value::Set(set)) => {
                let mut pool: Vec<String> = set.iter().cloned().collect();
                let take = if count < 0 {
                    0
                } else if count == 0 || count > pool.len() as i64 {
                    pool.len()
                } else {
                    count as usize
                };

                let mut rng = rand::thread_rng();
                let mut popped = Vec::with_capacity(take);
                for _ in 0..take {
                    let index = rng.gen_range(0..pool.len());
                    let member = pool.swap_remove(index);
                    set.remove(&member);
                    popped.push(member);
                }
                (popped, set.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(popped)
    }

    /// Returns random members without mutating the set. A positive count
    /// samples without replacement (capped at the set size), a negative
    /// count samples |count| members with replacement, zero yields nothing.
    pub fn srandmember(&self, key: &str, count: i64) -> Result<Vec<String>, StoreError> {
        let shard = self.shard(key).read();
        let set = match shard.get(key) {
            None => return Ok(Vec::new()),
            Some(Value::Set(set)) => set,
            Some(_) => return Err(StoreError::WrongType),
        };

        let mut pool: Vec<String> = set.iter().cloned().collect();
        let mut rng = rand::thread_rng();

        match count {
            0 => Ok(Vec::new()),
            count if count > 0 => {
                pool.shuffle(&mut rng);
                pool.truncate(count.min(pool.len() as i64) as usize);
                Ok(pool)
            }
            count => {
                let mut picked = Vec::with_capacity(count.unsigned_abs() as usize);
                for _ in 0..count.unsigned_abs() {
                    picked.push(pool[rng.gen_range(0..pool.len())].clone());
                }
                Ok(picked)
            }
        }
    }

    /// Intersection over the argument keys. Any absent key short-circuits
    /// to an empty result.
    pub fn sinter(&self, keys: &[String]) -> Result<Vec<String>, StoreError> {
        let mut iter = keys.iter();
        let first = match iter.next() {
            Some(key) => key,
            None => return Ok(Vec::new()),
        };
        let mut result = match self.read_set(first)? {
            Some(set) => set,
            None => return Ok(Vec::new()),
        };

        for key in iter {
            let other = match self.read_set(key)? {
                Some(set) => set,
                None => return Ok(Vec::new()),
            };
            result.retain(|member| other.contains(member));
            if result.is_empty() {
                return Ok(Vec::new());
            }
        }
        Ok(result.into_iter().collect())
    }

    /// Union over the argument keys; absent keys read as empty sets.
    pub fn sunion(&self, keys: &[String]) -> Result<Vec<String>, StoreError> {
        let mut result = HashSet::new();
        for key in keys {
            if let Some(set) = self.read_set(key)? {
                result.extend(set);
            }
        }
        Ok(result.into_iter().collect())
    }

    /// First set minus all the rest; absent keys read as empty sets.
    pub fn sdiff(&self, keys: &[String]) -> Result<Vec<String>, StoreError> {
        let mut iter = keys.iter();
        let first = match iter.next() {
            Some(key) => key,
            None => return Ok(Vec::new()),
        };
        let mut result = match self.read_set(first)? {
            Some(set) => set,
            None => return Ok(Vec::new()),
        };

        for key in iter {
            if let Some(other) = self.read_set(key)? {
                result.retain(|member| !other.contains(member));
            }
        }
        Ok(result.into_iter().collect())
    }

    fn read_set(&self, key: &str) -> Result<Option<HashSet<String>>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::Set(set)) => Ok(Some(set.clone())),
            Some(_) => Err(StoreError::WrongType),
        }
    }
}
