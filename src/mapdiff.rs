// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Difference between two maps

use std::collections::BTreeMap;

/// Difference from a `left` map to a `right` map.
///
/// Built over `BTreeMap` so the delta itself iterates in key order.
#[derive(Clone, Debug, PartialEq)]
pub struct MapDelta<K, V> {
    /// Keys present only in the right map
    pub added: BTreeMap<K, V>,
    /// Keys present only in the left map
    pub removed: BTreeMap<K, V>,
    /// Keys present in both with differing values, as `(left, right)`
    pub changed: BTreeMap<K, (V, V)>,
    /// Number of keys present in both with equal values
    pub unchanged: usize,
}

impl<K, V> MapDelta<K, V>
where
    K: Ord + Clone,
    V: PartialEq + Clone,
{
    /// Compute the delta from `left` to `right`
    pub fn between(left: &BTreeMap<K, V>, right: &BTreeMap<K, V>) -> Self {
        let mut delta = Self {
            added: BTreeMap::new(),
            removed: BTreeMap::new(),
            changed: BTreeMap::new(),
            unchanged: 0,
        };

        for (key, left_value) in left {
            match right.get(key) {
                None => {
                    delta.removed.insert(key.clone(), left_value.clone());
                }
                Some(right_value) if right_value == left_value => delta.unchanged += 1,
                Some(right_value) => {
                    delta
                        .changed
                        .insert(key.clone(), (left_value.clone(), right_value.clone()));
                }
            }
        }
        for (key, right_value) in right {
            if !left.contains_key(key) {
                delta.added.insert(key.clone(), right_value.clone());
            }
        }

        delta
    }

    /// True when the two maps were equal
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

#[cfg(test)]
#[path = "mapdiff_tests.rs"]
mod tests;
