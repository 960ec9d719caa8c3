use std::fmt;

use dynhash_error::{TableError, TableResult};

/// Максимальная длина ключа: любой ключ из 18 цифр помещается в `u64`.
pub const MAX_KEY_LENGTH: usize = 18;

/// Ключ таблицы: строка из `key_length` десятичных цифр вместе с её
/// целочисленным значением.
///
/// Идентичность ключа определяется текстом. Так как все ключи одной таблицы
/// имеют одинаковую длину, равенство текста равносильно равенству значений.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    text: String,
    value: u64,
}

impl Key {
    /// Разбирает текстовый ключ и проверяет его длину.
    pub fn parse(
        text: &str,
        key_length: usize,
    ) -> TableResult<Self> {
        let len = text.chars().count();
        if len != key_length {
            return Err(TableError::invalid_key(
                text,
                format!("expected {key_length} digits, got {len}"),
            ));
        }

        let value = digits_value(text)
            .ok_or_else(|| TableError::invalid_key(text, "key must contain only digits 0-9"))?;

        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// Строит ключ из целочисленной формы, дополняя его нулями слева до
    /// `key_length` цифр.
    pub fn from_value(
        value: u64,
        key_length: usize,
    ) -> TableResult<Self> {
        let text = format!("{value:0key_length$}");
        if text.len() != key_length {
            return Err(TableError::invalid_key(
                text,
                format!("value {value} does not fit in {key_length} digits"),
            ));
        }

        Ok(Self { text, value })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    /// Индекс бакета для таблицы размера `size`.
    #[inline]
    pub fn slot(
        &self,
        size: usize,
    ) -> usize {
        slot_of(self.value, size)
    }
}

/// `value mod size` для таблицы размера `size`.
#[inline]
pub(crate) fn slot_of(
    value: u64,
    size: usize,
) -> usize {
    (value % size as u64) as usize
}

/// Значение строки из цифр без проверки длины.
///
/// Возвращает `None` для пустой строки, строки с не-цифрами или числа,
/// не помещающегося в `u64`.
pub(crate) fn digits_value(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for Key {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Key {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Key> for String {
    fn from(key: Key) -> Self {
        key.text
    }
}
