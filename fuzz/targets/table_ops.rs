#![no_main]

use arbitrary::Arbitrary;
use dynhash::{DynamicHashTable, ExpansionPolicy};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Insert(u16),
    InsertText(String),
    Search(u16),
    Remove(u16),
    Force,
    Reset,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    initial_size: u8,
    partial: bool,
    ops: Vec<Op>,
}

const KEY_LENGTH: usize = 4;
const KEY_SPACE: u16 = 10_000;

fuzz_target!(|input: FuzzInput| {
    let policy = if input.partial {
        ExpansionPolicy::Partial
    } else {
        ExpansionPolicy::Total
    };
    let initial_size = 2 + (input.initial_size % 16) as usize;
    let Ok(mut t) = DynamicHashTable::new(initial_size, KEY_LENGTH, policy) else {
        return;
    };

    for op in input.ops.into_iter().take(512) {
        match op {
            Op::Insert(v) => {
                let before = t.len();
                match t.insert_value(u64::from(v % KEY_SPACE)) {
                    Ok(idx) => {
                        assert_eq!(t.len(), before + 1);
                        assert!(idx < t.table_size());
                    }
                    Err(_) => assert_eq!(t.len(), before),
                }
            }
            Op::InsertText(s) => {
                let before = t.len();
                if t.insert(&s).is_err() {
                    assert_eq!(t.len(), before);
                }
            }
            Op::Search(v) => {
                let v = v % KEY_SPACE;
                if let Some(idx) = t.search(&format!("{v:04}")) {
                    assert_eq!(idx, v as usize % t.table_size());
                }
            }
            Op::Remove(v) => {
                let key = format!("{:04}", v % KEY_SPACE);
                let had = t.contains(&key);
                assert_eq!(t.remove(&key), had);
                assert!(!t.contains(&key));
            }
            // Ограничиваем размер, каждое расширение удваивает память при total
            Op::Force if t.table_size() < 1 << 16 => {
                t.force_expansion();
            }
            Op::Force => {}
            Op::Reset => t.reset(),
        }

        // Инварианты после каждой операции
        assert_eq!(
            Some(t.table_size()),
            policy.size_for(t.initial_size(), t.level())
        );
        assert!(t.len() * 4 <= t.table_size() * 3);
        assert_eq!(t.history().len(), t.level() as usize);

        let mut placed = 0;
        for (i, bucket) in t.buckets().enumerate() {
            for key in bucket.iter() {
                assert_eq!(key.slot(t.table_size()), i);
            }
            placed += bucket.len();
        }
        assert_eq!(placed, t.len());
    }
});
