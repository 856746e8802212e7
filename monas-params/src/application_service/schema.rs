//! Declarative description of the parameters an endpoint accepts.

use crate::domain::PresencePolicy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,

    /// Registered plugin name, e.g. `cid` or `timeout`.
    #[serde(rename = "type")]
    pub type_name: String,

    #[serde(default)]
    pub required: bool,

    /// Raw value coerced in place of an absent optional field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Other raw keys accepted for this field, tried in order after `name`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    /// Accept a list of values (a single value counts as a one-element list).
    #[serde(default)]
    pub many: bool,

    /// Overrides the plugin's presence policy for this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<PresencePolicy>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required: false,
            default: None,
            aliases: Vec::new(),
            many: false,
            presence: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn many(mut self) -> Self {
        self.many = true;
        self
    }

    /// Treat numeric zero as a real value instead of a missing one.
    pub fn allow_zero(self) -> Self {
        self.presence(PresencePolicy::AllowZero)
    }

    pub fn presence(mut self, policy: PresencePolicy) -> Self {
        self.presence = Some(policy);
        self
    }

    /// Raw keys consulted for this field, in lookup order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Ordered set of fields; validation walks them in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A field with the same name is replaced in place.
    pub fn field(mut self, spec: FieldSpec) -> Self {
        match self.fields.iter_mut().find(|f| f.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.fields.push(spec),
        }
        self
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_spec_builder() {
        let spec = FieldSpec::new("timeout", "timeout")
            .required()
            .allow_zero()
            .alias("t");

        assert_eq!(spec.name, "timeout");
        assert_eq!(spec.type_name, "timeout");
        assert!(spec.required);
        assert!(!spec.many);
        assert_eq!(spec.presence, Some(PresencePolicy::AllowZero));
        assert_eq!(spec.keys().collect::<Vec<_>>(), ["timeout", "t"]);
    }

    #[test]
    fn test_field_spec_default_value() {
        let spec = FieldSpec::new("cidBase", "cidBase").default_value("base32");
        assert_eq!(spec.default, Some(json!("base32")));
    }

    #[test]
    fn test_schema_keeps_declaration_order() {
        let schema = Schema::new()
            .field(FieldSpec::new("b", "string"))
            .field(FieldSpec::new("a", "string"))
            .field(FieldSpec::new("c", "string"));

        let names: Vec<_> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_schema_replaces_duplicate_field() {
        let schema = Schema::new()
            .field(FieldSpec::new("arg", "string"))
            .field(FieldSpec::new("other", "string"))
            .field(FieldSpec::new("arg", "cid").required());

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields()[0].type_name, "cid");
        assert!(schema.get("arg").unwrap().required);
        assert!(schema.get("missing").is_none());
    }

    #[test]
    fn test_schema_deserialize() {
        let schema: Schema = serde_json::from_value(json!({
            "fields": [
                {"name": "arg", "type": "cidAndPath", "required": true, "many": true},
                {"name": "cidBase", "type": "cidBase", "aliases": ["cid-base"]},
                {"name": "timeout", "type": "timeout", "presence": "allow_zero"}
            ]
        }))
        .unwrap();

        assert_eq!(schema.len(), 3);
        assert!(schema.fields()[0].required);
        assert!(schema.fields()[0].many);
        assert_eq!(schema.fields()[1].aliases, ["cid-base"]);
        assert_eq!(schema.fields()[2].presence, Some(PresencePolicy::AllowZero));
    }
}
