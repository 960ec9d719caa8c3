//! Генераторы для property-тестов таблицы.

use dynhash::ExpansionPolicy;
use proptest::prelude::*;

/// Длина ключа в тестах: 3 цифры, 1000 различных ключей.
pub const KEY_LENGTH: usize = 3;

pub fn policy() -> impl Strategy<Value = ExpansionPolicy> {
    prop_oneof![Just(ExpansionPolicy::Total), Just(ExpansionPolicy::Partial)]
}

pub fn initial_size() -> impl Strategy<Value = usize> {
    2usize..=32
}

/// Набор различных значений ключей в порядке вставки.
pub fn distinct_values(max_len: usize) -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::hash_set(0u64..1000, 0..max_len)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Операция над таблицей.
#[derive(Debug, Clone)]
pub enum Op {
    Insert(u64),
    Remove(u64),
    Force,
}

pub fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u64..1000).prop_map(Op::Insert),
        3 => (0u64..1000).prop_map(Op::Remove),
        1 => Just(Op::Force),
    ]
}

pub fn key(value: u64) -> String {
    format!("{value:0KEY_LENGTH$}")
}
