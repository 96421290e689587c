use super::{normalize_range, Store, StoreError, Value, ZSet};

impl Store {
    /// Adds or updates scored members, creating the sorted set when absent.
    /// Returns the number of members that were newly added or whose score
    /// changed.
    pub fn zadd(&self, key: &str, pairs: Vec<(f64, String)>) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let entry = shard
            .entry(key.to_string())
            .or_insert_with(|| Value::ZSet(ZSet::new()));

        match entry {
            Value::ZSet(zset) => {
                let mut changed = 0;
                for (score, member) in pairs {
                    if zset.insert(member, score) {
                        changed += 1;
                    }
                }
                Ok(changed)
            }
            _ => Err(StoreError::WrongType),
        }
    }

    pub fn zscore(&self, key: &str, member: &str) -> Result<Option<f64>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::ZSet(zset)) => Ok(zset.score(member)),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Removes members, returning how many existed. A drained sorted set is
    /// removed from the keyspace.
    pub fn zrem(&self, key: &str, members: &[String]) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let (removed, drained) = match shard.get_mut(key) {
            None => return Ok(0),
            Some(Value::ZSet(zset)) => {
                let mut removed = 0;
                for member in members {
                    if zset.remove(member) {
                        removed += 1;
                    }
                }
                (removed, zset.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(removed)
    }

    pub fn zcard(&self, key: &str) -> Result<i64, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(0),
            Some(Value::ZSet(zset)) => Ok(zset.len() as i64),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Ascending index slice with negative-friendly, clamped bounds.
    pub fn zrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(String, f64)>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::ZSet(zset)) => match normalize_range(zset.len(), start, stop) {
                None => Ok(Vec::new()),
                Some((start, stop)) => Ok(zset
                    .asc()
                    .skip(start)
                    .take(stop - start + 1)
                    .map(|(member, score)| (member.to_string(), score))
                    .collect()),
            },
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Descending index slice, same bound semantics as [`Store::zrange`].
    pub fn zrevrange(
        &self,
        key: &str,
        start: i64,
        stop: i64,
    ) -> Result<Vec<(String, f64)>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::ZSet(zset)) => match normalize_range(zset.len(), start, stop) {
                None => Ok(Vec::new()),
                Some((start, stop)) => Ok(zset
                    .desc()
                    .into_iter()
                    .skip(start)
                    .take(stop - start + 1)
                    .map(|(member, score)| (member.to_string(), score))
                    .collect()),
            },
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Ascending score filter with inclusive bounds, then `LIMIT` applied.
    pub fn zrange_by_score(
        &self,
        key: &str,
        min: f64,
        max: f64,
        offset: i64,
        count: i64,
    ) -> Result<Vec<(String, f64)>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::ZSet(zset)) => {
                let matched = zset
                    .range_by_score(min, max)
                    .map(|(member, score)| (member.to_string(), score))
                    .collect();
                Ok(apply_limit(matched, offset, count))
            }
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Descending score filter with inclusive bounds, then `LIMIT` applied.
    pub fn zrevrange_by_score(
        &self,
        key: &str,
        max: f64,
        min: f64,
        offset: i64,
        count: i64,
    ) -> Result<Vec<(String, f64)>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::ZSet(zset)) => {
                let matched = zset
                    .desc()
                    .into_iter()
                    .filter(|(_, score)| *score >= min && *score <= max)
                    .map(|(member, score)| (member.to_string(), score))
                    .collect();
                Ok(apply_limit(matched, offset, count))
            }
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn zcount(&self, key: &str, min: f64, max: f64) -> Result<i64, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(0),
            Some(Value::ZSet(zset)) => Ok(zset.range_by_score(min, max).count() as i64),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Adds `delta` to the member's score, creating the key and/or member as
    /// needed; an absent member ends up with score `delta`. Returns the new
    /// score.
    pub fn zincrby(&self, key: &str, delta: f64, member: String) -> Result<f64, StoreError> {
        let mut shard = self.shard(key).write();
        let entry = shard
            .entry(key.to_string())
            .or_insert_with(|| Value::ZSet(ZSet::new()));

        match entry {
            Value::ZSet(zset) => {
                let score = match zset.score(&member) {
                    Some(current) => current + delta,
                    None => delta,
                };
                zset.insert(member, score);
                Ok(score)
            }
            _ => Err(StoreError::WrongType),
        }
    }

    pub fn zrank(&self, key: &str, member: &str) -> Result<Option<i64>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::ZSet(zset)) => Ok(zset.rank(member).map(|rank| rank as i64)),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn zrevrank(&self, key: &str, member: &str) -> Result<Option<i64>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::ZSet(zset)) => Ok(zset.rev_rank(member).map(|rank| rank as i64)),
            Some(_) => Err(StoreError::WrongType),
        }
    }
}

/// `LIMIT offset count` over an already filtered, already ordered result.
/// A negative offset clamps to 0; `count == -1` means unlimited, any other
/// negative count selects nothing.
fn apply_limit(items: Vec<(String, f64)>, offset: i64, count: i64) -> Vec<(String, f64)> {
    let len = items.len() as i64;
    let start = offset.max(0);
    let mut end = start.saturating_add(count);
    if count == -1 || end > len {
        end = len;
    }
    if start >= end || start >= len {
        return Vec::new();
    }

    items
        .into_iter()
        .skip(start as usize)
        .take((end - start) as usize)
        .collect()
}
