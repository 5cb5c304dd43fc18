use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

/// Declarative description of the filter panel: one group per filter
/// dimension, each with the checkbox values it offers. Shipped as a TOML
/// asset compiled into the frontend.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FilterSchema {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub groups: Vec<FilterGroupDef>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FilterGroupDef {
    pub key: String,
    pub label: Option<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl FilterGroupDef {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

impl FilterSchema {
    #[tracing::instrument(skip(raw))]
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let schema: Self =
            toml::from_str(raw).context("failed to parse filter schema")?;
        debug!(
            version = schema.version,
            groups = schema.groups.len(),
            "parsed filter schema"
        );
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::FilterSchema;

    #[test]
    fn schema_parses_groups_in_order() {
        let raw = r#"
            version = 1

            [[groups]]
            key = "skills"
            label = "Skills"
            values = ["Python", "Rust", "SQL"]

            [[groups]]
            key = "location"
            values = ["Remote", "Bangalore"]
        "#;

        let schema = FilterSchema::parse(raw).expect("parse schema");
        assert_eq!(schema.groups.len(), 2);
        assert_eq!(schema.groups[0].label(), "Skills");
        // Label falls back to the raw key.
        assert_eq!(schema.groups[1].label(), "location");
        assert_eq!(schema.groups[1].values.len(), 2);
    }

    #[test]
    fn empty_document_is_a_valid_empty_schema() {
        let schema = FilterSchema::parse("").expect("parse empty schema");
        assert!(schema.groups.is_empty());
    }

    #[test]
    fn malformed_schema_is_an_error() {
        assert!(FilterSchema::parse("groups = \"nope\"").is_err());
    }
}
