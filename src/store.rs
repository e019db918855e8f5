// src/store.rs
//! In-memory shape of one scrape: the header labels plus one ordered
//! key/value record per table row.
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One table row: column name → cell text, in header order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryRecord {
    fields: Vec<(String, String)>,
}

impl CountryRecord {
    /// Zip header labels with cells. Callers check the widths match.
    pub fn new(headers: &[String], cells: Vec<String>) -> Self {
        let fields = headers.iter().cloned().zip(cells).collect();
        Self { fields }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Value of the column at `idx` (header order).
    pub fn value_at(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for CountryRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = CountryRecord;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object of string fields")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(4));
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            fields.push((k, v));
        }
        Ok(CountryRecord { fields })
    }
}

impl<'de> Deserialize<'de> for CountryRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

/// Everything one run scraped, in page order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountryDataset {
    pub headers: Vec<String>,
    pub records: Vec<CountryRecord>,
}

impl CountryDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn andorra() -> CountryRecord {
        let headers: Vec<String> =
            ["Country", "Alpha-2", "Alpha-3", "Numeric"].map(String::from).into();
        CountryRecord::new(&headers, ["Andorra", "AD", "AND", "020"].map(String::from).into())
    }

    #[test]
    fn record_lookup_by_key_and_position() {
        let r = andorra();
        assert_eq!(r.get("Alpha-3"), Some("AND"));
        assert_eq!(r.get("Missing"), None);
        assert_eq!(r.value_at(3), Some("020"));
        assert_eq!(r.value_at(4), None);
        assert_eq!(r.len(), 4);
    }

    #[test]
    fn serializes_in_header_order() {
        let json = serde_json::to_string(&andorra()).unwrap();
        assert_eq!(json, r#"{"Country":"Andorra","Alpha-2":"AD","Alpha-3":"AND","Numeric":"020"}"#);
    }

    #[test]
    fn deserialize_keeps_document_order() {
        let r: CountryRecord =
            serde_json::from_str(r#"{"Numeric":"020","Country":"Andorra"}"#).unwrap();
        assert_eq!(r.keys().collect::<Vec<_>>(), vec!["Numeric", "Country"]);
        assert_eq!(r.values().collect::<Vec<_>>(), vec!["020", "Andorra"]);
    }
}
