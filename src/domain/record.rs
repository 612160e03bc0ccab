// ============================================================
// RECORD TYPES
// ============================================================
// Parsed CSV rows keyed by header name

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Deref;

/// One CSV row, keyed by header name in header order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, Option<String>)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set the value for `key`. A repeated key keeps its first position
    /// and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`; `None` when the key is unknown or the row was too short
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .and_then(|(_, value)| value.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (key, value) in iter {
            record.insert(key, Some(value.into()));
        }
        record
    }
}

// Absent values are left out, so short rows render without those keys.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present = self.entries.iter().filter(|(_, value)| value.is_some());
        let mut map = serializer.serialize_map(Some(present.clone().count()))?;
        for (key, value) in present {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Records of one conversion, in source row order
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<Record>);

impl ResultSet {
    pub fn into_inner(self) -> Vec<Record> {
        self.0
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<Record>> for ResultSet {
    fn from(records: Vec<Record>) -> Self {
        Self(records)
    }
}

impl Deref for ResultSet {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoIterator for ResultSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut record = Record::new();
        record.insert("a", Some("1".to_string()));
        record.insert("b", Some("2".to_string()));
        record.insert("a", Some("3".to_string()));

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(record.get("a"), Some("3"));
    }

    #[test]
    fn test_absent_value() {
        let mut record = Record::new();
        record.insert("Date", Some("3".to_string()));
        record.insert("Value", None);

        assert!(record.contains_key("Value"));
        assert_eq!(record.get("Value"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_json_skips_absent_values() {
        let mut short = Record::new();
        short.insert("Date", Some("5".to_string()));
        short.insert("Value", None);

        let rows = ResultSet::from(vec![
            Record::from_iter([("Date", "3"), ("Value", "4")]),
            short,
        ]);

        assert_eq!(
            rows.to_json().unwrap(),
            r#"[{"Date":"3","Value":"4"},{"Date":"5"}]"#
        );
    }

    #[test]
    fn test_json_keeps_header_order() {
        let record = Record::from_iter([("z", "1"), ("a", "2"), ("m", "3")]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"z":"1","a":"2","m":"3"}"#
        );
    }
}
