use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::Bound;

use bytes::Bytes;
use ordered_float::OrderedFloat;

/// A stored value: exactly one of the five shapes. A key keeps its shape
/// from creation until deletion; operators that expect a different shape
/// fail instead of coercing.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(Bytes),
    List(VecDeque<Bytes>),
    Hash(HashMap<String, Bytes>),
    Set(HashSet<String>),
    ZSet(ZSet),
}

/// A sorted set: unique members, each tagged with an `f64` score.
///
/// Two indexes are kept in lockstep: `members` answers point lookups and
/// `ordered` holds the ascending `(score, member)` order used by ranges and
/// ranks. Every mutation goes through [`ZSet::insert`] / [`ZSet::remove`] so
/// the two can never disagree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZSet {
    members: HashMap<String, f64>,
    ordered: BTreeSet<(OrderedFloat<f64>, String)>,
}

impl ZSet {
    pub fn new() -> ZSet {
        ZSet::default()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn score(&self, member: &str) -> Option<f64> {
        self.members.get(member).copied()
    }

    /// Adds the member or updates its score. Returns `true` when the member
    /// is new or its score actually changed.
    pub fn insert(&mut self, member: String, score: f64) -> bool {
        match self.members.get(&member) {
            Some(&old) if old == score => false,
            Some(&old) => {
                self.ordered.remove(&(OrderedFloat(old), member.clone()));
                self.ordered.insert((OrderedFloat(score), member.clone()));
                self.members.insert(member, score);
                true
            }
            None => {
                self.ordered.insert((OrderedFloat(score), member.clone()));
                self.members.insert(member, score);
                true
            }
        }
    }

    pub fn remove(&mut self, member: &str) -> bool {
        match self.members.remove(member) {
            Some(score) => {
                self.ordered.remove(&(OrderedFloat(score), member.to_string()));
                true
            }
            None => false,
        }
    }

    /// Members in ascending `(score, member)` order.
    pub fn asc(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ordered
            .iter()
            .map(|(score, member)| (member.as_str(), score.0))
    }

    /// Members in descending score order. Ties stay in ascending member
    /// order, so this is not simply the reverse of [`ZSet::asc`].
    pub fn desc(&self) -> Vec<(&str, f64)> {
        let mut out: Vec<(&str, f64)> = self
            .members
            .iter()
            .map(|(member, score)| (member.as_str(), *score))
            .collect();
        out.sort_by(|a, b| {
            OrderedFloat(b.1)
                .cmp(&OrderedFloat(a.1))
                .then_with(|| a.0.cmp(b.0))
        });
        out
    }

    /// Members with score in `[min, max]`, ascending.
    pub fn range_by_score(&self, min: f64, max: f64) -> impl Iterator<Item = (&str, f64)> {
        self.ordered
            .range((
                Bound::Included((OrderedFloat(min), String::new())),
                Bound::Unbounded,
            ))
            .take_while(move |(score, _)| score.0 <= max)
            .map(|(score, member)| (member.as_str(), score.0))
    }

    /// 0-based position in the ascending order.
    pub fn rank(&self, member: &str) -> Option<usize> {
        self.members.get(member)?;
        self.asc().position(|(m, _)| m == member)
    }

    /// 0-based position in the descending order.
    pub fn rev_rank(&self, member: &str) -> Option<usize> {
        self.members.get(member)?;
        self.desc().iter().position(|(m, _)| *m == member)
    }
}
