//! Response schemas sent with structured-output calls.
//!
//! Mirrors the OpenAPI subset the Gemini API accepts in
//! `generationConfig.responseSchema`: only the four types the app needs.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    Array,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    fn leaf(schema_type: SchemaType) -> Self {
        Schema {
            schema_type,
            properties: BTreeMap::new(),
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::leaf(SchemaType::String)
    }

    pub fn number() -> Self {
        Self::leaf(SchemaType::Number)
    }

    pub fn array(items: Schema) -> Self {
        Schema {
            schema_type: SchemaType::Array,
            properties: BTreeMap::new(),
            items: Some(Box::new(items)),
        }
    }

    pub fn string_list() -> Self {
        Self::array(Self::string())
    }

    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Schema)>,
        K: Into<String>,
    {
        Schema {
            schema_type: SchemaType::Object,
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            items: None,
        }
    }

    #[cfg(test)]
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_schema_serializes_in_api_shape() {
        let schema = Schema::object([
            ("score", Schema::number()),
            ("feedback", Schema::string_list()),
        ]);

        assert_eq!(
            serde_json::to_value(&schema).unwrap(),
            json!({
                "type": "OBJECT",
                "properties": {
                    "feedback": { "type": "ARRAY", "items": { "type": "STRING" } },
                    "score": { "type": "NUMBER" }
                }
            })
        );
    }

    #[test]
    fn test_leaf_omits_empty_properties_and_items() {
        let value = serde_json::to_value(Schema::string()).unwrap();
        assert_eq!(value, json!({ "type": "STRING" }));
    }
}
