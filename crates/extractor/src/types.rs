use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Normalized four-field result for one template file.
///
/// Each field is a comma-joined token list (or `""` when the file carried no
/// data for that section/stage pair).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateRecord {
    pub left1: String,
    pub left2: String,
    pub right1: String,
    pub right2: String,
}

/// Filename → record mapping, in directory listing order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemplateCollection {
    records: Vec<(String, TemplateRecord)>,
}

impl TemplateCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, filename: impl Into<String>, record: TemplateRecord) {
        self.records.push((filename.into(), record));
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&TemplateRecord> {
        self.records
            .iter()
            .find(|(name, _)| name == filename)
            .map(|(_, record)| record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TemplateRecord)> {
        self.records
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    /// JSON object keyed by filename, keys in insertion order.
    pub fn to_json(&self) -> Result<Value> {
        let mut map = Map::with_capacity(self.records.len());
        for (name, record) in &self.records {
            map.insert(name.clone(), serde_json::to_value(record)?);
        }
        Ok(Value::Object(map))
    }
}

/// A directory entry that could not be read as UTF-8 text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileFailure {
    pub filename: String,
    pub detail: String,
}

/// Outcome of one extraction run: the records that parsed, plus the entries
/// that failed at the file boundary and were skipped.
#[derive(Clone, Debug, Default)]
pub struct ExtractReport {
    pub templates: TemplateCollection,
    pub failures: Vec<FileFailure>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_serializes_with_exactly_four_string_fields() {
        let record = TemplateRecord {
            left1: "1C, 2F".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["left1"], "1C, 2F");
        assert_eq!(object["left2"], "");
        assert_eq!(object["right1"], "");
        assert_eq!(object["right2"], "");
    }

    #[test]
    fn collection_preserves_insertion_order() {
        let mut collection = TemplateCollection::new();
        collection.insert("b.txt", TemplateRecord::default());
        collection.insert("a.txt", TemplateRecord::default());

        let keys: Vec<&str> = collection.iter().map(|(name, _)| name).collect();
        assert_eq!(keys, vec!["b.txt", "a.txt"]);

        let json = collection.to_json().unwrap();
        let ordered: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(ordered, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn get_finds_records_by_filename() {
        let mut collection = TemplateCollection::new();
        collection.insert(
            "pulse.txt",
            TemplateRecord {
                right2: "FF".into(),
                ..Default::default()
            },
        );
        assert_eq!(collection.get("pulse.txt").unwrap().right2, "FF");
        assert!(collection.get("other.txt").is_none());
        assert_eq!(collection.len(), 1);
        assert!(!collection.is_empty());
    }
}
