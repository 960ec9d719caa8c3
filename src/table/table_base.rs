use dynhash_error::{TableError, TableResult};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::{
    bucket::Bucket,
    event::{ExpansionEvent, ExpansionTrigger},
    key::{digits_value, slot_of, Key, MAX_KEY_LENGTH},
    policy::ExpansionPolicy,
};

/// Минимальный начальный размер таблицы.
pub const MIN_INITIAL_SIZE: usize = 2;

/// Порог коэффициента заполнения, после которого таблица расширяется.
pub const LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/// Порог в виде дроби `3/4` для сравнения в целых числах.
const THRESHOLD_NUM: usize = 3;
const THRESHOLD_DEN: usize = 4;

/// Хеш-таблица с цепочками и расширением по уровням.
///
/// **ИНВАРИАНТЫ:**
///
/// - `buckets.len() == policy.size_for(initial_size, level)`
/// - ключ со значением `k` лежит только в бакете `k mod buckets.len()`
/// - после любой успешной вставки `len / buckets.len() <= 0.75`
/// - `history` содержит ровно `level` событий, уровни идут по порядку
///
/// Расширение всегда полное: все ключи перераспределяются по новому размеру
/// до возврата из операции, частично перехешированного состояния не бывает.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicHashTable {
    initial_size: usize,
    key_length: usize,
    policy: ExpansionPolicy,
    level: u32,
    buckets: Vec<Bucket>,
    len: usize,
    history: Vec<ExpansionEvent>,
}

/// Сводная статистика заполнения для отображения.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableStats {
    pub elements: usize,
    pub buckets: usize,
    pub empty_buckets: usize,
    pub longest_chain: usize,
    pub load_factor: f64,
}

////////////////////////////////////////////////////////////////////////////////
// Собственные методы
////////////////////////////////////////////////////////////////////////////////

impl DynamicHashTable {
    /// Создаёт пустую таблицу уровня 0 из `initial_size` бакетов.
    ///
    /// Инициализация не является расширением и в историю не попадает.
    pub fn new(
        initial_size: usize,
        key_length: usize,
        policy: ExpansionPolicy,
    ) -> TableResult<Self> {
        if initial_size < MIN_INITIAL_SIZE {
            return Err(TableError::configuration(format!(
                "initial size must be at least {MIN_INITIAL_SIZE}, got {initial_size}"
            )));
        }
        if key_length == 0 || key_length > MAX_KEY_LENGTH {
            return Err(TableError::configuration(format!(
                "key length must be between 1 and {MAX_KEY_LENGTH}, got {key_length}"
            )));
        }

        Ok(Self {
            initial_size,
            key_length,
            policy,
            level: 0,
            buckets: Self::empty_buckets(initial_size),
            len: 0,
            history: Vec::new(),
        })
    }

    /// Вставляет ключ, заданный текстом.
    ///
    /// Возвращает индекс бакета, в котором ключ находится после всех
    /// вызванных вставкой расширений.
    pub fn insert(
        &mut self,
        key: &str,
    ) -> TableResult<usize> {
        let key = Key::parse(key, self.key_length)?;
        self.insert_key(key)
    }

    /// Вставляет ключ, заданный целым числом (дополняется нулями до
    /// `key_length`).
    pub fn insert_value(
        &mut self,
        value: u64,
    ) -> TableResult<usize> {
        let key = Key::from_value(value, self.key_length)?;
        self.insert_key(key)
    }

    /// Вставляет уже разобранный ключ.
    pub fn insert_key(
        &mut self,
        key: Key,
    ) -> TableResult<usize> {
        if key.as_str().len() != self.key_length {
            return Err(TableError::invalid_key(
                key.as_str(),
                format!("expected {} digits", self.key_length),
            ));
        }
        if self.buckets.iter().any(|b| b.contains(key.as_str())) {
            return Err(TableError::DuplicateKey {
                key: key.into(),
            });
        }

        let value = key.value();
        let idx = key.slot(self.buckets.len());
        debug!(key = %key, bucket = idx, "insert");

        self.buckets[idx].push(key);
        self.len += 1;

        while self.exceeds_threshold() {
            let event = self.expand(ExpansionTrigger::Automatic);
            if event.is_noop() {
                warn!(level = event.level, size = event.new_size, "table cannot grow any further");
                break;
            }
        }

        Ok(slot_of(value, self.buckets.len()))
    }

    /// Ищет ключ и возвращает индекс его бакета.
    ///
    /// Формат ключа строго не проверяется: некорректный ключ просто не будет
    /// найден.
    pub fn search(
        &self,
        key: &str,
    ) -> Option<usize> {
        let idx = slot_of(digits_value(key)?, self.buckets.len());
        self.buckets[idx].contains(key).then_some(idx)
    }

    /// Возвращает `true`, если ключ присутствует в таблице.
    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.search(key).is_some()
    }

    /// Удаляет ключ. Возвращает `true`, если ключ был удалён.
    ///
    /// Таблица никогда не сжимается: размер только растёт.
    pub fn remove(
        &mut self,
        key: &str,
    ) -> bool {
        let Some(value) = digits_value(key) else {
            return false;
        };

        let idx = slot_of(value, self.buckets.len());
        let removed = self.buckets[idx].remove(key);
        if removed {
            self.len -= 1;
            debug!(key, bucket = idx, "remove");
        }
        removed
    }

    /// Безусловно переходит на следующий уровень, независимо от
    /// коэффициента заполнения.
    pub fn force_expansion(&mut self) -> ExpansionEvent {
        self.expand(ExpansionTrigger::Forced)
    }

    /// Возвращает таблицу в состояние сразу после создания с той же
    /// конфигурацией.
    pub fn reset(&mut self) {
        self.level = 0;
        self.buckets = Self::empty_buckets(self.initial_size);
        self.len = 0;
        self.history.clear();
        info!(size = self.initial_size, policy = %self.policy, "table reset");
    }

    pub fn initial_size(&self) -> usize {
        self.initial_size
    }

    pub fn key_length(&self) -> usize {
        self.key_length
    }

    pub fn policy(&self) -> ExpansionPolicy {
        self.policy
    }

    /// Число расширений с момента создания или последнего сброса.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Текущий размер таблицы (число бакетов).
    pub fn table_size(&self) -> usize {
        self.buckets.len()
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Общее число ключей.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Коэффициент заполнения: число ключей / число бакетов.
    pub fn load_factor(&self) -> f64 {
        if self.buckets.is_empty() {
            return 0.0;
        }
        self.len as f64 / self.buckets.len() as f64
    }

    pub fn bucket(
        &self,
        idx: usize,
    ) -> Option<&Bucket> {
        self.buckets.get(idx)
    }

    /// Ключи бакета `idx` в порядке вставки.
    pub fn elements_in_bucket(
        &self,
        idx: usize,
    ) -> Option<&[Key]> {
        self.buckets.get(idx).map(Bucket::keys)
    }

    /// Бакеты в порядке индексов.
    pub fn buckets(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Все ключи: по бакетам в порядке индексов, внутри бакета в порядке
    /// вставки.
    pub fn keys(&self) -> impl Iterator<Item = &Key> + '_ {
        self.buckets.iter().flat_map(Bucket::iter)
    }

    /// Журнал расширений в порядке возникновения.
    pub fn history(&self) -> &[ExpansionEvent] {
        &self.history
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            elements: self.len,
            buckets: self.buckets.len(),
            empty_buckets: self.buckets.iter().filter(|b| b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Bucket::len).max().unwrap_or(0),
            load_factor: self.load_factor(),
        }
    }

    /// Собирает таблицу из готовых частей после проверки всех инвариантов.
    pub(crate) fn from_parts(
        initial_size: usize,
        key_length: usize,
        policy: ExpansionPolicy,
        level: u32,
        buckets: Vec<Vec<String>>,
        history: Vec<ExpansionEvent>,
    ) -> TableResult<Self> {
        let mut table = Self::new(initial_size, key_length, policy)
            .map_err(|e| TableError::corrupted(e.to_string()))?;

        let size = policy.size_for(initial_size, level).ok_or_else(|| {
            TableError::corrupted(format!("level {level} size does not fit in memory"))
        })?;
        if buckets.len() != size {
            return Err(TableError::corrupted(format!(
                "level {level} of {policy} table must have {size} buckets, got {}",
                buckets.len()
            )));
        }
        Self::check_history(initial_size, policy, level, &history)?;

        table.level = level;
        table.buckets = Self::empty_buckets(size);
        table.history = history;

        for (idx, texts) in buckets.into_iter().enumerate() {
            for text in texts {
                let key = Key::parse(&text, key_length)
                    .map_err(|e| TableError::corrupted(e.to_string()))?;
                if key.slot(size) != idx {
                    return Err(TableError::corrupted(format!(
                        "key {key} stored in bucket {idx}, expected {}",
                        key.slot(size)
                    )));
                }
                if table.buckets[idx].contains(key.as_str()) {
                    return Err(TableError::corrupted(format!("duplicate key {key}")));
                }
                table.buckets[idx].push(key);
                table.len += 1;
            }
        }

        if table.exceeds_threshold() {
            return Err(TableError::corrupted(format!(
                "load factor {:.3} exceeds {LOAD_FACTOR_THRESHOLD}",
                table.load_factor()
            )));
        }

        Ok(table)
    }

    /// Один шаг расширения: уровень + 1, полное перераспределение ключей.
    ///
    /// Если размер следующего уровня непредставим, таблица не меняется:
    /// уровень и история остаются прежними, возвращается событие с
    /// `new_size == old_size`.
    fn expand(
        &mut self,
        trigger: ExpansionTrigger,
    ) -> ExpansionEvent {
        let old_size = self.buckets.len();
        let Some(new_size) = self.policy.size_for(self.initial_size, self.level + 1) else {
            return ExpansionEvent {
                level: self.level,
                old_size,
                new_size: old_size,
                trigger,
            };
        };

        self.level += 1;
        if new_size != old_size {
            let mut fresh = Self::empty_buckets(new_size);
            for key in std::mem::take(&mut self.buckets)
                .into_iter()
                .flat_map(Bucket::into_keys)
            {
                let idx = key.slot(new_size);
                fresh[idx].push(key);
            }
            self.buckets = fresh;
        }

        let event = ExpansionEvent {
            level: self.level,
            old_size,
            new_size,
            trigger,
        };
        self.history.push(event);

        info!(
            level = event.level,
            old_size,
            new_size,
            trigger = %trigger,
            elements = self.len,
            "table expanded"
        );

        event
    }

    #[inline]
    fn exceeds_threshold(&self) -> bool {
        self.len * THRESHOLD_DEN > self.buckets.len() * THRESHOLD_NUM
    }

    fn empty_buckets(size: usize) -> Vec<Bucket> {
        let mut buckets = Vec::with_capacity(size);
        buckets.resize_with(size, Bucket::default);
        buckets
    }

    /// История должна описывать цепочку уровней `1..=level`, где размер
    /// каждого события совпадает с формулой стратегии.
    fn check_history(
        initial_size: usize,
        policy: ExpansionPolicy,
        level: u32,
        history: &[ExpansionEvent],
    ) -> TableResult<()> {
        if history.len() != level as usize {
            return Err(TableError::corrupted(format!(
                "level {level} requires {level} history events, got {}",
                history.len()
            )));
        }

        for (pos, event) in history.iter().enumerate() {
            let expected_level = pos as u32 + 1;
            let old_size = policy.size_for(initial_size, expected_level - 1);
            let new_size = policy.size_for(initial_size, expected_level);

            if event.level != expected_level
                || Some(event.old_size) != old_size
                || Some(event.new_size) != new_size
            {
                return Err(TableError::corrupted(format!(
                    "history event #{pos} ({event}) does not match {policy} expansion"
                )));
            }
        }

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Тесты
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn total(
        size: usize,
        key_len: usize,
    ) -> DynamicHashTable {
        DynamicHashTable::new(size, key_len, ExpansionPolicy::Total).unwrap()
    }

    fn bucket_texts(
        t: &DynamicHashTable,
        idx: usize,
    ) -> Vec<&str> {
        t.elements_in_bucket(idx)
            .unwrap()
            .iter()
            .map(Key::as_str)
            .collect()
    }

    /// Тест проверяет отказ конструктора на неверных параметрах.
    #[test]
    fn test_new_rejects_bad_config() {
        for (size, len) in [(0, 2), (1, 2), (4, 0), (4, MAX_KEY_LENGTH + 1)] {
            let err = DynamicHashTable::new(size, len, ExpansionPolicy::Total).unwrap_err();
            assert!(
                matches!(err, TableError::Configuration { .. }),
                "size={size} len={len}"
            );
        }
    }

    #[test]
    fn test_new_table_is_empty_level_zero() {
        let t = DynamicHashTable::new(5, 3, ExpansionPolicy::Partial).unwrap();
        assert_eq!(t.level(), 0);
        assert_eq!(t.table_size(), 5);
        assert_eq!(t.bucket_count(), 5);
        assert!(t.is_empty());
        assert!(t.history().is_empty());
        assert_eq!(t.load_factor(), 0.0);
    }

    /// Тест проверяет, что при коэффициенте ровно 0.75 расширения нет, а
    /// следующая вставка удваивает таблицу.
    #[test]
    fn test_threshold_is_strict() {
        let mut t = total(4, 2);
        assert_eq!(t.insert("01").unwrap(), 1);
        assert_eq!(t.insert("02").unwrap(), 2);
        assert_eq!(t.insert("03").unwrap(), 3);
        assert_eq!(t.table_size(), 4);
        assert_eq!(t.load_factor(), 0.75);

        assert_eq!(t.insert("04").unwrap(), 4);
        assert_eq!(t.table_size(), 8);
        assert_eq!(t.level(), 1);
        assert_eq!(t.load_factor(), 0.5);

        let ev = t.history()[0];
        assert_eq!(
            ev,
            ExpansionEvent {
                level: 1,
                old_size: 4,
                new_size: 8,
                trigger: ExpansionTrigger::Automatic,
            }
        );
    }

    /// Тест проверяет, что индекс, возвращаемый вставкой, относится к новому
    /// размеру таблицы.
    #[test]
    fn test_insert_returns_index_after_expansion() {
        let mut t = total(4, 2);
        t.insert("10").unwrap();
        t.insert("20").unwrap();
        t.insert("30").unwrap();
        // 13 mod 4 = 1, но после расширения до 8: 13 mod 8 = 5.
        assert_eq!(t.insert("13").unwrap(), 5);
        assert_eq!(t.search("13"), Some(5));
    }

    #[test]
    fn test_duplicate_is_rejected_without_changes() {
        let mut t = total(4, 2);
        t.insert("07").unwrap();
        let before = t.clone();

        let err = t.insert("07").unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey { ref key } if key == "07"));
        assert_eq!(t, before);
    }

    #[test]
    fn test_invalid_key_leaves_table_untouched() {
        let mut t = total(4, 2);
        t.insert("11").unwrap();
        let before = t.clone();

        assert!(matches!(t.insert("1"), Err(TableError::InvalidKey { .. })));
        assert!(matches!(t.insert("1x"), Err(TableError::InvalidKey { .. })));
        assert!(matches!(t.insert("111"), Err(TableError::InvalidKey { .. })));
        assert_eq!(t, before);
    }

    #[test]
    fn test_insert_value_pads_with_zeros() {
        let mut t = total(4, 3);
        assert_eq!(t.insert_value(5).unwrap(), 1);
        assert_eq!(t.search("005"), Some(1));
        assert!(t.insert_value(1000).is_err());
        assert!(matches!(
            t.insert_value(5),
            Err(TableError::DuplicateKey { .. })
        ));
    }

    #[test]
    fn test_insert_key_with_foreign_length() {
        let mut t = total(4, 3);
        let key = Key::parse("12", 2).unwrap();
        assert!(matches!(
            t.insert_key(key),
            Err(TableError::InvalidKey { .. })
        ));
    }

    /// Тест проверяет, что поиск не находит ключи с другой записью того же
    /// числа и некорректные строки.
    #[test]
    fn test_search_is_exact_and_lenient() {
        let mut t = total(4, 2);
        t.insert("05").unwrap();

        assert_eq!(t.search("05"), Some(1));
        assert_eq!(t.search("5"), None);
        assert_eq!(t.search("005"), None);
        assert_eq!(t.search("ab"), None);
        assert_eq!(t.search(""), None);
        assert_eq!(t.search("09"), None);
    }

    #[test]
    fn test_remove_never_shrinks() {
        let mut t = total(4, 2);
        for k in ["01", "02", "03", "04"] {
            t.insert(k).unwrap();
        }
        assert_eq!(t.table_size(), 8);

        for k in ["01", "02", "03", "04"] {
            assert!(t.remove(k));
        }
        assert!(!t.remove("01"));
        assert!(!t.remove("zz"));
        assert!(t.is_empty());
        assert_eq!(t.table_size(), 8);
        assert_eq!(t.level(), 1);
    }

    /// Тест проверяет, что удаление сохраняет порядок оставшихся ключей в
    /// бакете.
    #[test]
    fn test_remove_keeps_bucket_order() {
        let mut t = total(10, 2);
        // все ключи попадают в бакет 1
        for k in ["01", "11", "21", "31"] {
            t.insert(k).unwrap();
        }
        assert!(t.remove("11"));
        assert_eq!(bucket_texts(&t, 1), vec!["01", "21", "31"]);
    }

    /// Тест проверяет, что расширение до непредставимого размера ничего не
    /// меняет: уровень, история и бакеты остаются прежними.
    #[test]
    fn test_expansion_past_usize_is_noop() {
        let mut t = total(4, 2);
        t.insert("01").unwrap();
        // 4 * 2^63 не помещается в usize
        t.level = 62;
        let before = t.clone();

        let ev = t.force_expansion();
        assert!(ev.is_noop());
        assert_eq!(ev.level, 62);
        assert_eq!(ev.old_size, 4);
        assert_eq!(t, before);
        assert!(t.history().is_empty());
    }

    #[test]
    fn test_force_expansion_on_empty_table() {
        let mut t = DynamicHashTable::new(4, 2, ExpansionPolicy::Partial).unwrap();
        let ev = t.force_expansion();
        assert_eq!(ev.level, 1);
        assert_eq!(ev.old_size, 4);
        assert_eq!(ev.new_size, 6);
        assert_eq!(ev.trigger, ExpansionTrigger::Forced);
        assert_eq!(t.table_size(), 6);
        assert_eq!(t.history(), &[ev]);
    }

    /// Тест проверяет, что принудительное расширение перераспределяет ключи
    /// так же, как автоматическое: итоговый размер, уровень и состав ключей.
    #[test]
    fn test_forced_expansion_matches_automatic_redistribution() {
        let mut forced = DynamicHashTable::new(4, 2, ExpansionPolicy::Partial).unwrap();
        for k in ["07", "10", "13"] {
            forced.insert(k).unwrap();
        }
        forced.force_expansion();

        let mut automatic = DynamicHashTable::new(4, 2, ExpansionPolicy::Partial).unwrap();
        for k in ["07", "10", "13", "99"] {
            automatic.insert(k).unwrap();
        }
        automatic.remove("99");

        assert_eq!(forced.level(), automatic.level());
        assert_eq!(forced.table_size(), automatic.table_size());
        for idx in 0..forced.table_size() {
            assert_eq!(bucket_texts(&forced, idx), bucket_texts(&automatic, idx));
        }
        assert_eq!(forced.history()[0].trigger, ExpansionTrigger::Forced);
        assert_eq!(automatic.history()[0].trigger, ExpansionTrigger::Automatic);
    }

    /// Тест проверяет порядок перераспределения: бакеты по возрастанию
    /// индекса, внутри бакета в порядке вставки.
    #[test]
    fn test_redistribution_order() {
        let mut t = total(4, 2);
        // 09 -> 1, 01 -> 1, 17 -> 1 в таблице из 4 бакетов
        t.insert("09").unwrap();
        t.insert("01").unwrap();
        t.insert("17").unwrap();
        t.force_expansion();

        // в таблице из 8: 09 -> 1, 01 -> 1, 17 -> 1
        assert_eq!(bucket_texts(&t, 1), vec!["09", "01", "17"]);
    }

    #[test]
    fn test_reset_keeps_configuration() {
        let mut t = DynamicHashTable::new(3, 2, ExpansionPolicy::Partial).unwrap();
        for k in ["01", "02", "03", "04", "05"] {
            t.insert(k).unwrap();
        }
        t.force_expansion();
        assert!(t.level() > 0);

        t.reset();
        assert_eq!(t, DynamicHashTable::new(3, 2, ExpansionPolicy::Partial).unwrap());
    }

    /// Тест проверяет, что одна вставка может вызвать несколько шагов
    /// расширения (после восстановления таблицы на пороге).
    #[test]
    fn test_expansion_loop_until_below_threshold() {
        let mut t = DynamicHashTable::new(2, 2, ExpansionPolicy::Partial).unwrap();
        // 2 -> 3 -> 4 -> 6 ...
        for (i, k) in ["10", "20", "30", "40", "50", "60", "70"].iter().enumerate() {
            t.insert(k).unwrap();
            assert!(t.load_factor() <= LOAD_FACTOR_THRESHOLD, "after insert #{i}");
        }
        assert_eq!(t.history().len() as u32, t.level());
        assert_eq!(
            t.table_size(),
            ExpansionPolicy::Partial.size_for(2, t.level()).unwrap()
        );
    }

    #[test]
    fn test_stats() {
        let mut t = total(8, 2);
        for k in ["01", "09", "17", "02"] {
            t.insert(k).unwrap();
        }
        let s = t.stats();
        assert_eq!(s.elements, 4);
        assert_eq!(s.buckets, 8);
        assert_eq!(s.empty_buckets, 6);
        assert_eq!(s.longest_chain, 3);
        assert_eq!(s.load_factor, 0.5);
    }

    #[test]
    fn test_keys_iteration_order() {
        let mut t = total(4, 2);
        for k in ["03", "01", "05", "02"] {
            t.insert(k).unwrap();
        }
        // после расширения до 8: 01 -> 1, 02 -> 2, 03 -> 3, 05 -> 5
        let keys: Vec<_> = t.keys().map(Key::as_str).collect();
        assert_eq!(keys, vec!["01", "02", "03", "05"]);
        assert_eq!(t.buckets().count(), 8);
        assert!(t.bucket(8).is_none());
        assert!(t.elements_in_bucket(8).is_none());
    }

    #[test]
    fn test_from_parts_validates_placement() {
        let ok = DynamicHashTable::from_parts(
            4,
            2,
            ExpansionPolicy::Total,
            0,
            vec![vec![], vec!["01".into()], vec![], vec![]],
            vec![],
        );
        assert!(ok.is_ok());

        let misplaced = DynamicHashTable::from_parts(
            4,
            2,
            ExpansionPolicy::Total,
            0,
            vec![vec!["01".into()], vec![], vec![], vec![]],
            vec![],
        );
        assert!(matches!(
            misplaced,
            Err(TableError::CorruptedSnapshot { .. })
        ));
    }

    #[test]
    fn test_from_parts_validates_history() {
        let wrong_history = DynamicHashTable::from_parts(
            4,
            2,
            ExpansionPolicy::Total,
            1,
            vec![vec![]; 8],
            vec![],
        );
        assert!(matches!(
            wrong_history,
            Err(TableError::CorruptedSnapshot { .. })
        ));

        let ev = ExpansionEvent {
            level: 1,
            old_size: 4,
            new_size: 8,
            trigger: ExpansionTrigger::Forced,
        };
        let ok = DynamicHashTable::from_parts(
            4,
            2,
            ExpansionPolicy::Total,
            1,
            vec![vec![]; 8],
            vec![ev],
        )
        .unwrap();
        assert_eq!(ok.level(), 1);
        assert_eq!(ok.history(), &[ev]);
    }

    #[test]
    fn test_from_parts_rejects_overload() {
        let overloaded = DynamicHashTable::from_parts(
            2,
            1,
            ExpansionPolicy::Total,
            0,
            vec![vec!["0".into(), "2".into()], vec!["1".into()]],
            vec![],
        );
        assert!(matches!(
            overloaded,
            Err(TableError::CorruptedSnapshot { .. })
        ));
    }
}
