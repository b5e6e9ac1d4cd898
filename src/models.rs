//! Admin Form Models
//!
//! Data structures matching the JSON shapes the server stores.

use leptos_listfield::{FieldSpec, InlineRecord};
use serde::{Deserialize, Serialize};

/// One core value record (matches the `core_values_json` field shape).
///
/// Both keys default so rows saved by older admin sessions, which may
/// omit one of them, still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoreValue {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl InlineRecord for CoreValue {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "title",
            placeholder: "Title (e.g. Co-operation)",
            multiline: false,
            rows: 1,
            class: "w-full p-2 border rounded focus:ring-2 focus:ring-green-500 font-bold text-gray-800",
        },
        FieldSpec {
            name: "description",
            placeholder: "Description",
            multiline: true,
            rows: 2,
            class: "w-full p-2 border rounded focus:ring-2 focus:ring-green-500 text-sm text-gray-600",
        },
    ];

    fn field(&self, name: &str) -> String {
        match name {
            "title" => self.title.clone(),
            "description" => self.description.clone(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos_listfield::ListField;

    #[test]
    fn decodes_the_server_rendered_shape() {
        let raw = r#"[{"title":"Sustainability","description":"Farming that lasts."}]"#;
        let list = ListField::<CoreValue>::from_serialized(raw);
        assert_eq!(
            list.items(),
            &[CoreValue {
                title: "Sustainability".to_string(),
                description: "Farming that lasts.".to_string(),
            }]
        );
    }

    #[test]
    fn missing_keys_default_to_empty() {
        let list = ListField::<CoreValue>::from_serialized(r#"[{"title":"Only a title"}]"#);
        assert_eq!(list.items()[0].description, "");
    }

    #[test]
    fn unknown_keys_are_tolerated_and_dropped_on_save() {
        let raw = r#"[{"title":"T","description":"D","legacy_icon":"leaf.png"}]"#;
        let list = ListField::<CoreValue>::from_serialized(raw);
        assert_eq!(list.len(), 1);
        assert_eq!(list.serialized(), r#"[{"title":"T","description":"D"}]"#);
    }

    #[test]
    fn field_access_dispatches_by_name() {
        let mut value = CoreValue::default();
        value.set_field("title", "Co-operation".to_string());
        value.set_field("description", "Working together.".to_string());
        value.set_field("nonexistent", "ignored".to_string());

        assert_eq!(value.field("title"), "Co-operation");
        assert_eq!(value.field("description"), "Working together.");
        assert_eq!(value.field("nonexistent"), "");
    }

    #[test]
    fn title_is_single_line_and_description_multiline() {
        let [title, description] = CoreValue::FIELDS else {
            panic!("expected exactly two fields");
        };
        assert_eq!(title.name, "title");
        assert!(!title.multiline);
        assert_eq!(description.name, "description");
        assert!(description.multiline);
        assert_eq!(description.rows, 2);
    }
}
