//! Field normalizers.
//!
//! Asset and link fields arrive either as a bare string, as an object carrying
//! `url`/`href`, or not at all. They are classified into a tagged union right at
//! ingestion and only the canonical string leaves this module.

use serde_json::Value;

/// Placeholder href for links that cannot be resolved.
pub const UNRESOLVED_HREF: &str = "#";

/// Shape of a link field as found on a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkField {
    Plain(String),
    Object { href: String },
    Absent,
}

impl From<Option<&Value>> for LinkField {
    fn from(field: Option<&Value>) -> Self {
        match field {
            Some(Value::String(s)) if !s.is_empty() => LinkField::Plain(s.clone()),
            Some(Value::Object(map)) => match map.get("href") {
                Some(Value::String(href)) if !href.is_empty() => LinkField::Object {
                    href: href.clone(),
                },
                _ => LinkField::Absent,
            },
            _ => LinkField::Absent,
        }
    }
}

impl LinkField {
    pub fn href(&self) -> Option<&str> {
        match self {
            LinkField::Plain(s) => Some(s),
            LinkField::Object { href } => Some(href),
            LinkField::Absent => None,
        }
    }
}

/// Shape of an asset field as found on a raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageField {
    Plain(String),
    Asset { url: String },
    Absent,
}

impl From<Option<&Value>> for ImageField {
    fn from(field: Option<&Value>) -> Self {
        match field {
            Some(Value::String(s)) if !s.is_empty() => ImageField::Plain(s.clone()),
            Some(Value::Object(map)) => match map.get("url") {
                Some(Value::String(url)) if !url.is_empty() => ImageField::Asset {
                    url: url.clone(),
                },
                _ => ImageField::Absent,
            },
            _ => ImageField::Absent,
        }
    }
}

impl ImageField {
    pub fn into_url(self) -> Option<String> {
        match self {
            ImageField::Plain(url) | ImageField::Asset { url } => Some(url),
            ImageField::Absent => None,
        }
    }
}

/// Canonical image URL of an asset field, or `None`.
pub fn resolve_image(field: Option<&Value>) -> Option<String> {
    ImageField::from(field).into_url()
}

/// Canonical href of a link field; never empty, `"#"` when unresolvable.
pub fn resolve_link(field: Option<&Value>) -> String {
    LinkField::from(field)
        .href()
        .unwrap_or(UNRESOLVED_HREF)
        .to_string()
}

/// Permissive accessors over raw records. Wrong types read as missing.
pub(crate) trait RecordExt {
    fn text(&self, field: &str) -> Option<String>;
    fn text_or(&self, field: &str, default: &str) -> String;
    fn flag(&self, field: &str) -> bool;
    fn order(&self, field: &str) -> i64;
    fn text_list(&self, field: &str) -> Vec<String>;
}

impl RecordExt for Value {
    fn text(&self, field: &str) -> Option<String> {
        self.get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn text_or(&self, field: &str, default: &str) -> String {
        self.text(field).unwrap_or_else(|| default.to_string())
    }

    fn flag(&self, field: &str) -> bool {
        self.get(field).and_then(Value::as_bool).unwrap_or(false)
    }

    fn order(&self, field: &str) -> i64 {
        match self.get(field) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    fn text_list(&self, field: &str) -> Vec<String> {
        self.get(field)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn link_resolution_covers_every_shape() {
        assert_eq!(resolve_link(None), "#");
        assert_eq!(resolve_link(Some(&Value::Null)), "#");
        assert_eq!(resolve_link(Some(&json!("x"))), "x");
        assert_eq!(resolve_link(Some(&json!({ "href": "y", "title": "Y" }))), "y");
        assert_eq!(resolve_link(Some(&json!({ "title": "no href" }))), "#");
        assert_eq!(resolve_link(Some(&json!(""))), "#");
        assert_eq!(resolve_link(Some(&json!(42))), "#");
    }

    #[test]
    fn image_resolution_covers_every_shape() {
        assert_eq!(resolve_image(Some(&json!({}))), None);
        assert_eq!(resolve_image(None), None);
        assert_eq!(resolve_image(Some(&json!("a.png"))), Some("a.png".to_string()));
        assert_eq!(
            resolve_image(Some(&json!({ "url": "b.png", "filename": "b.png" }))),
            Some("b.png".to_string())
        );
    }

    #[test]
    fn record_accessors_tolerate_wrong_types() {
        let record = json!({
            "title": 7,
            "display_order": "3",
            "is_active": "yes",
            "feature_bullets": ["a", 1, "b"],
        });
        assert_eq!(record.text_or("title", "fallback"), "fallback");
        assert_eq!(record.order("display_order"), 3);
        assert!(!record.flag("is_active"));
        assert_eq!(record.text_list("feature_bullets"), vec!["a", "b"]);
        assert_eq!(record.order("missing"), 0);
    }
}
