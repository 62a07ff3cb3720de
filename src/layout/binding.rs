use lazy_static::lazy_static;
use log::warn;
use regex::Regex;
use serde_yaml::Value;

use crate::front_matter::FrontMatter;

/// Scalar literal allowed as a property of the exported `meta` object
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl LiteralValue {
    /// Convert a front matter value. Null yields `None`; sequences and
    /// mappings are stringified to their JSON text.
    pub fn from_yaml(key: &str, value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(LiteralValue::String(s.clone())),
            Value::Bool(b) => Some(LiteralValue::Bool(*b)),
            Value::Number(n) => Some(number_literal(key, n)),
            Value::Null => {
                warn!("Front matter key `{}` is null and is left out of meta", key);
                None
            }
            Value::Tagged(tagged) => LiteralValue::from_yaml(key, &tagged.value),
            Value::Sequence(_) | Value::Mapping(_) => {
                warn!("Front matter key `{}` is not a scalar, exporting it as a string", key);
                let text = serde_json::to_string(value)
                    .or_else(|_| serde_yaml::to_string(value).map(|s| s.trim_end().to_string()))
                    .unwrap_or_default();
                Some(LiteralValue::String(text))
            }
        }
    }

    pub fn to_js(&self) -> String {
        match self {
            LiteralValue::String(s) => {
                serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
            }
            LiteralValue::Number(n) => n.to_string(),
            LiteralValue::Bool(b) => b.to_string(),
        }
    }
}

fn number_literal(key: &str, n: &serde_yaml::Number) -> LiteralValue {
    if let Some(i) = n.as_i64() {
        return LiteralValue::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return LiteralValue::Number(u.into());
    }
    match n.as_f64().and_then(serde_json::Number::from_f64) {
        Some(number) => LiteralValue::Number(number),
        None => {
            warn!("Front matter key `{}` is not a finite number, exporting it as a string", key);
            LiteralValue::String(n.to_string())
        }
    }
}

/// Object literal bound to the `meta` export, properties in authored order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MetaLiteral {
    pub properties: Vec<(String, LiteralValue)>,
}

impl MetaLiteral {
    pub fn from_front_matter(data: &FrontMatter) -> Self {
        let properties = data
            .iter()
            .filter_map(|(key, value)| {
                LiteralValue::from_yaml(key, value).map(|literal| (key.to_string(), literal))
            })
            .collect();
        MetaLiteral { properties }
    }

    pub fn to_js(&self) -> String {
        let properties = self
            .properties
            .iter()
            .map(|(key, value)| {
                let key = serde_json::to_string(key).unwrap_or_else(|_| "\"\"".to_string());
                format!("{}: {}", key, value.to_js())
            })
            .collect::<Vec<_>>();
        format!("{{{}}}", properties.join(", "))
    }
}

#[cfg(test)]
impl MetaLiteral {
    pub fn get(&self, key: &str) -> Option<&LiteralValue> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}

lazy_static! {
    static ref LAYOUT_IMPORT_REGEX: Regex =
        Regex::new(r#"^import \{ ?([A-Za-z_$][\w$]*) ?\} from "([^"]*)";?$"#).unwrap();
    static ref DEFAULT_EXPORT_REGEX: Regex = Regex::new(
        r"^export default \(\{ children \}\) => <([A-Za-z_$][\w$]*) meta=\{meta\}>\{children\}</([A-Za-z_$][\w$]*)>;?$"
    ).unwrap();
}

/// Module-level statements of a compiled content file
#[derive(Debug, Clone, PartialEq)]
pub enum EsmStatement {
    /// `import { Component } from "source";`
    LayoutImport { component: String, source: String },
    /// Default export rendering the body inside the layout with `meta`
    DefaultExport { component: String },
    /// `export const meta = {...};`
    MetaExport(MetaLiteral),
    /// Any other `import`/`export` block, kept as written
    Verbatim(String),
}

impl EsmStatement {
    /// Read a top-level block as module code. Blocks starting with
    /// `import ` or `export ` are ESM; the statements this crate emits are
    /// recognised as their typed variants.
    pub fn from_source(text: &str) -> Option<Self> {
        let text = text.trim();
        if !(text.starts_with("import ") || text.starts_with("export ")) {
            return None;
        }

        if let Some(caps) = LAYOUT_IMPORT_REGEX.captures(text) {
            return Some(EsmStatement::LayoutImport {
                component: caps[1].to_string(),
                source: caps[2].to_string(),
            });
        }

        if let Some(caps) = DEFAULT_EXPORT_REGEX.captures(text) {
            if caps[1] == caps[2] {
                return Some(EsmStatement::DefaultExport {
                    component: caps[1].to_string(),
                });
            }
        }

        Some(EsmStatement::Verbatim(text.to_string()))
    }

    /// A module holds at most one default export, whoever wrote it
    pub fn is_default_export(&self) -> bool {
        match self {
            EsmStatement::DefaultExport { .. } => true,
            EsmStatement::Verbatim(text) => text.starts_with("export default"),
            _ => false,
        }
    }

    pub fn is_meta_export(&self) -> bool {
        match self {
            EsmStatement::MetaExport(_) => true,
            EsmStatement::Verbatim(text) => text.starts_with("export const meta"),
            _ => false,
        }
    }

    pub fn to_js(&self) -> String {
        match self {
            EsmStatement::LayoutImport { component, source } => format!(
                "import {{ {} }} from {};",
                component,
                serde_json::to_string(source).unwrap_or_default()
            ),
            EsmStatement::DefaultExport { component } => format!(
                "export default ({{ children }}) => <{c} meta={{meta}}>{{children}}</{c}>;",
                c = component
            ),
            EsmStatement::MetaExport(meta) => format!("export const meta = {};", meta.to_js()),
            EsmStatement::Verbatim(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Mapping;

    fn front_matter(yaml: &str) -> FrontMatter {
        let mapping: Mapping = serde_yaml::from_str(yaml).unwrap();
        FrontMatter::from_mapping(mapping)
    }

    #[test]
    fn test_meta_literal_keeps_order_and_types() {
        let meta = MetaLiteral::from_front_matter(&front_matter(
            "title: \"Say \\\"hi\\\"\"\norder: 3\nratio: 0.5\ndraft: false\n",
        ));

        assert_eq!(
            meta.to_js(),
            r#"{"title": "Say \"hi\"", "order": 3, "ratio": 0.5, "draft": false}"#
        );
    }

    #[test]
    fn test_non_scalars_are_stringified_and_null_dropped() {
        let meta = MetaLiteral::from_front_matter(&front_matter("tags: [a, b]\nauthor: ~\n"));

        assert_eq!(meta.get("tags"), Some(&LiteralValue::String(r#"["a","b"]"#.to_string())));
        assert_eq!(meta.get("author"), None);
        assert_eq!(meta.properties.len(), 1);
    }

    #[test]
    fn test_statements_render() {
        let import = EsmStatement::LayoutImport {
            component: "BlogLayoutPage".to_string(),
            source: "../../components/blog-layout.tsx".to_string(),
        };
        assert_eq!(
            import.to_js(),
            r#"import { BlogLayoutPage } from "../../components/blog-layout.tsx";"#
        );

        let export = EsmStatement::DefaultExport {
            component: "BlogLayoutPage".to_string(),
        };
        assert_eq!(
            export.to_js(),
            "export default ({ children }) => <BlogLayoutPage meta={meta}>{children}</BlogLayoutPage>;"
        );

        let meta = EsmStatement::MetaExport(MetaLiteral::default());
        assert_eq!(meta.to_js(), "export const meta = {};");
    }

    #[test]
    fn test_emitted_statements_read_back_as_typed() {
        let import = EsmStatement::LayoutImport {
            component: "BlogLayoutPage".to_string(),
            source: "../../components/blog-layout.tsx".to_string(),
        };
        let export = EsmStatement::DefaultExport {
            component: "BlogLayoutPage".to_string(),
        };

        assert_eq!(EsmStatement::from_source(&import.to_js()), Some(import));
        assert_eq!(EsmStatement::from_source(&format!("{}\n", export.to_js())), Some(export));
    }

    #[test]
    fn test_other_module_code_is_verbatim() {
        let meta = EsmStatement::from_source("export const meta = {\"title\": \"A\"};").unwrap();
        assert_eq!(meta, EsmStatement::Verbatim("export const meta = {\"title\": \"A\"};".to_string()));
        assert!(meta.is_meta_export());
        assert!(!meta.is_default_export());

        let custom = EsmStatement::from_source("export default function Page() {}").unwrap();
        assert!(custom.is_default_export());

        let mismatched = "export default ({ children }) => <A meta={meta}>{children}</B>;";
        assert!(matches!(EsmStatement::from_source(mismatched), Some(EsmStatement::Verbatim(_))));
    }

    #[test]
    fn test_prose_is_not_module_code() {
        assert_eq!(EsmStatement::from_source("Important things first."), None);
        assert_eq!(EsmStatement::from_source("exports rose this year"), None);
    }
}
