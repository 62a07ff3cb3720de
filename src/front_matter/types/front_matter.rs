use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::post_meta::PostMeta;
use crate::utils::error::SiteResult;

/// Metadata block of a content file: string keys in authored order,
/// values exactly as YAML produced them. No schema is enforced here;
/// see [`FrontMatter::validate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Build from a parsed YAML mapping, stringifying non-string keys
    pub fn from_mapping(mapping: Mapping) -> Self {
        let mut fields = Mapping::with_capacity(mapping.len());
        for (key, value) in mapping {
            fields.insert(Value::String(key_to_string(&key)), value);
        }
        FrontMatter { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Value of `key` when it is a YAML string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over entries in authored order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .filter_map(|(key, value)| key.as_str().map(|k| (k, value)))
    }

    /// Validate the post schema, naming `path` in any failure
    pub fn validate(&self, path: &Path) -> SiteResult<PostMeta> {
        PostMeta::from_front_matter(self, path)
    }
}

#[cfg(test)]
impl FrontMatter {
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(Value::String(key.into()), value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_keep_authored_order() {
        let mapping: Mapping = serde_yaml::from_str("title: A\nlang: en\nid: a-post\n").unwrap();
        let fm = FrontMatter::from_mapping(mapping);

        let keys: Vec<&str> = fm.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "lang", "id"]);
        assert_eq!(fm.get_str("lang"), Some("en"));
    }

    #[test]
    fn test_non_string_keys_are_stringified() {
        let mapping: Mapping = serde_yaml::from_str("2023: year\ntrue: flag\n").unwrap();
        let fm = FrontMatter::from_mapping(mapping);

        assert_eq!(fm.get_str("2023"), Some("year"));
        assert_eq!(fm.get_str("true"), Some("flag"));
    }

    #[test]
    fn test_serializes_as_plain_json_object() {
        let mut fm = FrontMatter::default();
        fm.insert("title", Value::String("Hola".to_string()));
        fm.insert("draft", Value::Bool(false));

        let json = serde_json::to_string(&fm).unwrap();
        assert_eq!(json, r#"{"title":"Hola","draft":false}"#);
    }
}
