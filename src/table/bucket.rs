use super::key::Key;

/// Цепочка ключей, попавших в один слот таблицы.
///
/// Ёмкость бакета не ограничена. Порядок вставки сохраняется только для
/// отображения: поиск и удаление зависят лишь от идентичности ключа.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Bucket {
    keys: Vec<Key>,
}

impl Bucket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ключи бакета в порядке вставки.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(
        &self,
        text: &str,
    ) -> bool {
        self.keys.iter().any(|k| k.as_str() == text)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    pub(crate) fn push(
        &mut self,
        key: Key,
    ) {
        self.keys.push(key);
    }

    /// Удаляет первое точное совпадение, сохраняя порядок остальных ключей.
    pub(crate) fn remove(
        &mut self,
        text: &str,
    ) -> bool {
        match self.keys.iter().position(|k| k.as_str() == text) {
            Some(pos) => {
                self.keys.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> Key {
        Key::parse(s, s.len()).unwrap()
    }

    #[test]
    fn test_push_keeps_insertion_order() {
        let mut b = Bucket::new();
        b.push(key("09"));
        b.push(key("01"));
        b.push(key("05"));

        let texts: Vec<_> = b.iter().map(Key::as_str).collect();
        assert_eq!(texts, vec!["09", "01", "05"]);
        assert_eq!(b.len(), 3);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut b = Bucket::new();
        b.push(key("11"));
        b.push(key("22"));
        b.push(key("33"));

        assert!(b.remove("22"));
        assert!(!b.remove("22"));
        assert!(!b.contains("22"));

        let texts: Vec<_> = b.iter().map(Key::as_str).collect();
        assert_eq!(texts, vec!["11", "33"]);
    }

    #[test]
    fn test_empty_bucket() {
        let b = Bucket::new();
        assert!(b.is_empty());
        assert!(!b.contains("00"));
        assert_eq!(b.keys().len(), 0);
    }
}
