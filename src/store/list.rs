use std::collections::VecDeque;

use bytes::Bytes;

use super::{normalize_index, normalize_range, Store, StoreError, Value};

/// Which end of the list a push targets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListEnd {
    Head,
    Tail,
}

impl Store {
    /// Pushes values onto one end of the list, creating it when absent.
    /// Values land one at a time in argument order, so a head push reverses
    /// them relative to the argument list. Returns the new length.
    pub fn push(&self, key: &str, end: ListEnd, values: Vec<Bytes>) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let value = shard
            .entry(key.to_string())
            .or_insert_with(|| Value::List(VecDeque::new()));

        match value {
            Value::List(list) => {
                for v in values {
                    match end {
                        ListEnd::Head => list.push_front(v),
                        ListEnd::Tail => list.push_back(v),
                    }
                }
                Ok(list.len() as i64)
            }
            _ => Err(StoreError::WrongType),
        }
    }

    /// Like [`Store::push`] but a no-op returning 0 when the key is absent.
    pub fn pushx(&self, key: &str, end: ListEnd, values: Vec<Bytes>) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        match shard.get_mut(key) {
            None => Ok(0),
            Some(Value::List(list)) => {
                for v in values {
                    match end {
                        ListEnd::Head => list.push_front(v),
                        ListEnd::Tail => list.push_back(v),
                    }
                }
                Ok(list.len() as i64)
            }
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Removes and returns one element from the given end. `None` when the
    /// key is absent. A drained list is removed from the keyspace.
    pub fn pop(&self, key: &str, end: ListEnd) -> Result<Option<Bytes>, StoreError> {
        let mut shard = self.shard(key).write();
        let (popped, drained) = match shard.get_mut(key) {
            None => return Ok(None),
            Some(Value::List(list)) => {
                let popped = match end {
                    ListEnd::Head => list.pop_front(),
                    ListEnd::Tail => list.pop_back(),
                };
                (popped, list.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(popped)
    }

    pub fn llen(&self, key: &str) -> Result<i64, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(0),
            Some(Value::List(list)) => Ok(list.len() as i64),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Element at `index` (negative counts from the tail), or `None` when
    /// the key is absent or the index falls outside the list.
    pub fn lindex(&self, key: &str, index: i64) -> Result<Option<Bytes>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(None),
            Some(Value::List(list)) => Ok(normalize_index(list.len(), index)
                .and_then(|i| list.get(i))
                .cloned()),
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn lset(&self, key: &str, index: i64, value: Bytes) -> Result<(), StoreError> {
        let mut shard = self.shard(key).write();
        match shard.get_mut(key) {
            None => Err(StoreError::NoSuchKey),
            Some(Value::List(list)) => {
                let index =
                    normalize_index(list.len(), index).ok_or(StoreError::IndexOutOfRange)?;
                list[index] = value;
                Ok(())
            }
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Removes elements equal to `value`: from the head when `count > 0`,
    /// from the tail when `count < 0` (up to |count| either way), all of
    /// them when `count == 0`. Returns the number removed.
    pub fn lrem(&self, key: &str, count: i64, value: &Bytes) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        let (removed, drained) = match shard.get_mut(key) {
            None => return Ok(0),
            Some(Value::List(list)) => {
                let removed = remove_occurrences(list, count, value);
                (removed, list.is_empty())
            }
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(removed)
    }

    /// Inserts `value` next to the first occurrence of `pivot`. Returns the
    /// new length, -1 when the pivot is missing, 0 when the key is absent.
    pub fn linsert(
        &self,
        key: &str,
        before: bool,
        pivot: &Bytes,
        value: Bytes,
    ) -> Result<i64, StoreError> {
        let mut shard = self.shard(key).write();
        match shard.get_mut(key) {
            None => Ok(0),
            Some(Value::List(list)) => {
                let position = list.iter().position(|item| item == pivot);
                match position {
                    None => Ok(-1),
                    Some(index) => {
                        let index = if before { index } else { index + 1 };
                        list.insert(index, value);
                        Ok(list.len() as i64)
                    }
                }
            }
            Some(_) => Err(StoreError::WrongType),
        }
    }

    pub fn lrange(&self, key: &str, start: i64, stop: i64) -> Result<Vec<Bytes>, StoreError> {
        let shard = self.shard(key).read();
        match shard.get(key) {
            None => Ok(Vec::new()),
            Some(Value::List(list)) => match normalize_range(list.len(), start, stop) {
                None => Ok(Vec::new()),
                Some((start, stop)) => Ok(list
                    .iter()
                    .skip(start)
                    .take(stop - start + 1)
                    .cloned()
                    .collect()),
            },
            Some(_) => Err(StoreError::WrongType),
        }
    }

    /// Retains only the `[start, stop]` slice. An empty resulting range
    /// deletes the key outright.
    pub fn ltrim(&self, key: &str, start: i64, stop: i64) -> Result<(), StoreError> {
        let mut shard = self.shard(key).write();
        let drained = match shard.get_mut(key) {
            None => return Ok(()),
            Some(Value::List(list)) => match normalize_range(list.len(), start, stop) {
                None => true,
                Some((start, stop)) => {
                    list.drain(..start);
                    list.truncate(stop - start + 1);
                    false
                }
            },
            Some(_) => return Err(StoreError::WrongType),
        };

        if drained {
            shard.remove(key);
        }
        Ok(())
    }
}

fn remove_occurrences(list: &mut VecDeque<Bytes>, count: i64, value: &Bytes) -> i64 {
    let limit = if count == 0 {
        usize::MAX
    } else {
        count.unsigned_abs() as usize
    };

    let mut removed = 0;
    let mut kept = VecDeque::with_capacity(list.len());

    if count >= 0 {
        for item in list.drain(..) {
            if removed < limit && item == *value {
                removed += 1;
            } else {
                kept.push_back(item);
            }
        }
    } else {
        while let Some(item) = list.pop_back() {
            if removed < limit && item == *value {
                removed += 1;
            } else {
                kept.push_front(item);
            }
        }
    }

    *list = kept;
    removed as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(items: &[&str]) -> Vec<Bytes> {
        items.iter().map(|s| Bytes::copy_from_slice(s.as_bytes())).collect()
    }

    #[test]
    fn head_push_reverses_argument_order() {
        let store = Store::new();

        store.push("q", ListEnd::Head, bytes(&["a", "b", "c"])).unwrap();

        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["c", "b", "a"]));
    }

    #[test]
    fn pop_from_either_end() {
        let store = Store::new();
        store.push("q", ListEnd::Tail, bytes(&["a", "b", "c"])).unwrap();

        assert_eq!(store.pop("q", ListEnd::Head).unwrap(), Some(Bytes::from("a")));
        assert_eq!(store.pop("q", ListEnd::Tail).unwrap(), Some(Bytes::from("c")));
        assert_eq!(store.llen("q").unwrap(), 1);
    }

    #[test]
    fn popping_the_last_element_removes_the_key() {
        let store = Store::new();
        store.push("q", ListEnd::Tail, bytes(&["only"])).unwrap();

        store.pop("q", ListEnd::Head).unwrap();

        assert_eq!(store.exists(&["q".to_string()]), 0);
        assert_eq!(store.pop("q", ListEnd::Head).unwrap(), None);
    }

    #[test]
    fn pushx_requires_an_existing_list() {
        let store = Store::new();

        assert_eq!(store.pushx("q", ListEnd::Tail, bytes(&["a"])).unwrap(), 0);
        assert_eq!(store.exists(&["q".to_string()]), 0);

        store.push("q", ListEnd::Tail, bytes(&["a"])).unwrap();
        assert_eq!(store.pushx("q", ListEnd::Tail, bytes(&["b"])).unwrap(), 2);
    }

    #[test]
    fn lrem_honors_direction_and_count() {
        let store = Store::new();
        let fill = bytes(&["x", "a", "x", "b", "x"]);

        store.push("q", ListEnd::Tail, fill.clone()).unwrap();
        assert_eq!(store.lrem("q", 2, &Bytes::from("x")).unwrap(), 2);
        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["a", "b", "x"]));

        store.del(&["q".to_string()]);
        store.push("q", ListEnd::Tail, fill.clone()).unwrap();
        assert_eq!(store.lrem("q", -2, &Bytes::from("x")).unwrap(), 2);
        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["x", "a", "b"]));

        store.del(&["q".to_string()]);
        store.push("q", ListEnd::Tail, fill).unwrap();
        assert_eq!(store.lrem("q", 0, &Bytes::from("x")).unwrap(), 3);
        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["a", "b"]));
    }

    #[test]
    fn lrem_that_drains_the_list_removes_the_key() {
        let store = Store::new();
        store.push("q", ListEnd::Tail, bytes(&["x", "x"])).unwrap();

        assert_eq!(store.lrem("q", 0, &Bytes::from("x")).unwrap(), 2);
        assert_eq!(store.exists(&["q".to_string()]), 0);
    }

    #[test]
    fn linsert_before_and_after_the_pivot() {
        let store = Store::new();
        store.push("q", ListEnd::Tail, bytes(&["a", "c"])).unwrap();

        assert_eq!(
            store.linsert("q", true, &Bytes::from("c"), Bytes::from("b")).unwrap(),
            3
        );
        assert_eq!(
            store.linsert("q", false, &Bytes::from("c"), Bytes::from("d")).unwrap(),
            4
        );
        assert_eq!(
            store.lrange("q", 0, -1).unwrap(),
            bytes(&["a", "b", "c", "d"])
        );

        assert_eq!(
            store.linsert("q", true, &Bytes::from("zz"), Bytes::from("v")).unwrap(),
            -1
        );
        assert_eq!(
            store.linsert("nope", true, &Bytes::from("a"), Bytes::from("v")).unwrap(),
            0
        );
    }

    #[test]
    fn lset_errors() {
        let store = Store::new();

        assert_eq!(
            store.lset("q", 0, Bytes::from("v")),
            Err(StoreError::NoSuchKey)
        );

        store.push("q", ListEnd::Tail, bytes(&["a"])).unwrap();
        assert_eq!(
            store.lset("q", 5, Bytes::from("v")),
            Err(StoreError::IndexOutOfRange)
        );

        store.lset("q", -1, Bytes::from("z")).unwrap();
        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["z"]));
    }

    #[test]
    fn ltrim_keeps_the_slice_and_deletes_on_empty_range() {
        let store = Store::new();
        store
            .push("q", ListEnd::Tail, bytes(&["a", "b", "c", "d"]))
            .unwrap();

        store.ltrim("q", 1, 2).unwrap();
        assert_eq!(store.lrange("q", 0, -1).unwrap(), bytes(&["b", "c"]));

        store.ltrim("q", 1, 0).unwrap();
        assert_eq!(store.exists(&["q".to_string()]), 0);
    }

    #[test]
    fn trim_matches_the_pre_trim_range() {
        let store = Store::new();
        store
            .push("q", ListEnd::Tail, bytes(&["a", "b", "c", "d", "e"]))
            .unwrap();

        let expected = store.lrange("q", 1, -2).unwrap();
        store.ltrim("q", 1, -2).unwrap();

        assert_eq!(store.lrange("q", 0, -1).unwrap(), expected);
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let store = Store::new();
        store.set("s".to_string(), Bytes::from("v"));

        assert_eq!(
            store.push("s", ListEnd::Tail, bytes(&["a"])),
            Err(StoreError::WrongType)
        );
        assert_eq!(store.llen("s"), Err(StoreError::WrongType));
        assert_eq!(store.pop("s", ListEnd::Head), Err(StoreError::WrongType));
    }
}
