//! Validation engine.
//!
//! Walks a [`Schema`] in declaration order, runs the presence guard and then
//! the field's plugin, and collects every typed value and every field error.
//! Failures never stop sibling fields from being validated.

use crate::application_service::schema::{FieldSpec, Schema};
use crate::domain::presence::{self, PresencePolicy};
use crate::domain::{FieldError, ParamValue, ValidationError, ValidationErrors};
use crate::infrastructure::config::{ConfigError, ParamsConfig};
use crate::infrastructure::{PluginRegistry, RawParams};
use crate::port::TypePlugin;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Typed values keyed by field name, in schema order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedParams(Vec<(String, ParamValue)>);

impl ValidatedParams {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        let position = self.0.iter().position(|(key, _)| key == name)?;
        Some(self.0.remove(position).1)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn insert(&mut self, name: String, value: ParamValue) {
        self.0.push((name, value));
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Validated {
    pub values: ValidatedParams,
    pub errors: Vec<FieldError>,
}

impl Validated {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<ValidatedParams, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(self.values)
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

/// Schema-driven validator over a frozen plugin registry.
#[derive(Debug, Clone)]
pub struct Validator {
    registry: Arc<PluginRegistry>,
    allow_zero: bool,
    schemas: BTreeMap<String, Schema>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(PluginRegistry::builtin())
    }
}

impl Validator {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            registry,
            allow_zero: false,
            schemas: BTreeMap::new(),
        }
    }

    /// Build a validator from configuration, rejecting schemas that name
    /// unregistered types.
    pub fn from_config(
        registry: Arc<PluginRegistry>,
        config: &ParamsConfig,
    ) -> Result<Self, ConfigError> {
        let validator = Self {
            registry,
            allow_zero: config.presence.allow_zero,
            schemas: config.schemas.clone(),
        };
        validator.check_schemas()?;

        tracing::info!(
            "Parameter validator ready with {} schema(s)",
            validator.schemas.len()
        );
        Ok(validator)
    }

    /// Default for fields whose policy would otherwise treat `0` as missing.
    pub fn allow_zero(mut self, allow_zero: bool) -> Self {
        self.allow_zero = allow_zero;
        self
    }

    pub fn with_schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.schemas.insert(name.into(), schema);
        self
    }

    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    pub fn schema(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Ensure every named schema only uses registered types.
    pub fn check_schemas(&self) -> Result<(), ConfigError> {
        for (schema_name, schema) in &self.schemas {
            if let Some(field) = schema
                .fields()
                .iter()
                .find(|f| !self.registry.contains(&f.type_name))
            {
                return Err(ConfigError::UnknownType {
                    schema: schema_name.clone(),
                    field: field.name.clone(),
                    type_name: field.type_name.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn validate(&self, schema: &Schema, raw: &RawParams) -> Validated {
        let mut out = Validated::default();
        for field in schema.fields() {
            self.validate_field(field, raw, &mut out);
        }
        out
    }

    /// Validate against a schema registered under `name`.
    pub fn validate_named(&self, name: &str, raw: &RawParams) -> Result<Validated, ConfigError> {
        match self.schemas.get(name) {
            Some(schema) => Ok(self.validate(schema, raw)),
            None => {
                tracing::warn!("Unknown parameter schema {}", name);
                Err(ConfigError::UnknownSchema(name.to_string()))
            }
        }
    }

    fn policy_for(&self, field: &FieldSpec, plugin: Option<&dyn TypePlugin>) -> PresencePolicy {
        if let Some(policy) = field.presence {
            return policy;
        }

        match plugin.map(|p| p.presence()).unwrap_or_default() {
            PresencePolicy::Falsy if self.allow_zero => PresencePolicy::AllowZero,
            policy => policy,
        }
    }

    fn validate_field(&self, field: &FieldSpec, raw: &RawParams, out: &mut Validated) {
        let plugin = self.registry.resolve(&field.type_name);
        let policy = self.policy_for(field, plugin.as_deref());

        let raw_value = match field.keys().find_map(|key| raw.get(key)) {
            None if !field.required => field.default.as_ref(),
            found => found,
        };

        let present = match presence::check(field.required, raw_value, policy) {
            Ok(Some(value)) => value,
            Ok(None) => return,
            Err(error) => {
                reject(out, FieldError::new(&field.name, error));
                return;
            }
        };

        let Some(plugin) = plugin else {
            tracing::warn!(
                "Unknown parameter type {} for field {}",
                field.type_name,
                field.name
            );
            reject(
                out,
                FieldError::new(&field.name, ValidationError::UnknownType(field.type_name.clone())),
            );
            return;
        };

        if field.many {
            coerce_many(field, plugin.as_ref(), policy, present, out);
            return;
        }

        match plugin.coerce(present) {
            Ok(value) => out.values.insert(field.name.clone(), value),
            Err(error) => reject(out, FieldError::new(&field.name, error.into())),
        }
    }
}

/// Coerce each element of a list-valued field. The field only appears in
/// the result when every element passed.
fn coerce_many(
    field: &FieldSpec,
    plugin: &dyn TypePlugin,
    policy: PresencePolicy,
    present: &Value,
    out: &mut Validated,
) {
    let items: Vec<&Value> = match present {
        Value::Array(items) => items.iter().collect(),
        single => vec![single],
    };

    let mut values = Vec::with_capacity(items.len());
    let mut failed = false;
    for (index, item) in items.into_iter().enumerate() {
        let result = match presence::check(field.required, Some(item), policy) {
            Ok(None) => continue,
            Ok(Some(item)) => plugin.coerce(item).map_err(ValidationError::from),
            Err(error) => Err(error),
        };

        match result {
            Ok(value) => values.push(value),
            Err(error) => {
                failed = true;
                reject(out, FieldError::at(&field.name, index, error));
            }
        }
    }

    if !failed {
        out.values.insert(field.name.clone(), ParamValue::List(values));
    }
}

fn reject(out: &mut Validated, error: FieldError) {
    tracing::debug!("Rejected parameter {}", error);
    out.errors.push(error);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use serde_json::json;

    fn validator() -> Validator {
        Validator::default()
    }

    #[test]
    fn test_validate_collects_typed_values() {
        let schema = Schema::new()
            .field(FieldSpec::new("timeout", "timeout"))
            .field(FieldSpec::new("recursive", "boolean"))
            .field(FieldSpec::new("name", "string"));
        let raw = RawParams::from_query("timeout=30s&recursive=true&name=docs");

        let outcome = validator().validate(&schema, &raw);
        assert!(outcome.is_valid());
        assert_eq!(outcome.values.get("timeout"), Some(&ParamValue::Timeout(30_000)));
        assert_eq!(outcome.values.get("recursive"), Some(&ParamValue::Boolean(true)));
        assert_eq!(
            outcome.values.get("name"),
            Some(&ParamValue::String("docs".to_string()))
        );
    }

    #[test]
    fn test_values_follow_declaration_order() {
        let schema = Schema::new()
            .field(FieldSpec::new("z", "string"))
            .field(FieldSpec::new("a", "string"));
        let raw = RawParams::from_pairs([("a", "1"), ("z", "2")]);

        let outcome = validator().validate(&schema, &raw);
        let names: Vec<_> = outcome.values.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["z", "a"]);
    }

    #[test]
    fn test_required_missing_skips_coercion() {
        let schema = Schema::new().field(FieldSpec::new("arg", "cid").required());

        for raw in [RawParams::new(), RawParams::from_pairs([("arg", "")])] {
            let outcome = validator().validate(&schema, &raw);
            assert_eq!(
                outcome.errors,
                [FieldError::new("arg", ValidationError::RequiredFieldMissing)]
            );
            assert!(outcome.values.is_empty());
        }
    }

    #[test]
    fn test_optional_falsy_is_absent() {
        let schema = Schema::new().field(FieldSpec::new("arg", "cid"));
        let outcome = validator().validate(&schema, &RawParams::from_pairs([("arg", "")]));

        assert!(outcome.is_valid());
        assert!(!outcome.values.contains("arg"));
    }

    #[test]
    fn test_required_zero_timeout_is_missing() {
        let schema = Schema::new().field(FieldSpec::new("timeout", "timeout").required());
        let raw = RawParams::from_pairs([("timeout", 0)]);

        let outcome = validator().validate(&schema, &raw);
        assert_eq!(outcome.errors[0].kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_allow_zero_field_override() {
        let schema = Schema::new().field(
            FieldSpec::new("timeout", "timeout")
                .required()
                .allow_zero(),
        );
        let raw = RawParams::from_pairs([("timeout", 0)]);

        let outcome = validator().validate(&schema, &raw);
        assert!(outcome.is_valid());
        assert_eq!(outcome.values.get("timeout"), Some(&ParamValue::Timeout(0)));
    }

    #[test]
    fn test_allow_zero_validator_default() {
        let schema = Schema::new().field(FieldSpec::new("timeout", "timeout").required());
        let raw = RawParams::from_pairs([("timeout", 0)]);

        let outcome = validator().allow_zero(true).validate(&schema, &raw);
        assert_eq!(outcome.values.get("timeout"), Some(&ParamValue::Timeout(0)));

        // an explicit field policy still wins
        let schema = Schema::new().field(
            FieldSpec::new("timeout", "timeout")
                .required()
                .presence(PresencePolicy::Falsy),
        );
        let outcome = validator().allow_zero(true).validate(&schema, &raw);
        assert_eq!(outcome.errors[0].kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_unknown_type() {
        let schema = Schema::new().field(FieldSpec::new("arg", "nope"));
        let outcome = validator().validate(&schema, &RawParams::from_pairs([("arg", "x")]));

        assert_eq!(
            outcome.errors,
            [FieldError::new("arg", ValidationError::UnknownType("nope".to_string()))]
        );
    }

    #[test]
    fn test_presence_checked_before_type_lookup() {
        let schema = Schema::new().field(FieldSpec::new("arg", "nope").required());
        let outcome = validator().validate(&schema, &RawParams::new());
        assert_eq!(outcome.errors[0].kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_errors_do_not_stop_siblings() {
        let schema = Schema::new()
            .field(FieldSpec::new("timeout", "timeout"))
            .field(FieldSpec::new("cidBase", "cidBase"))
            .field(FieldSpec::new("data", "json"))
            .field(FieldSpec::new("flag", "boolean"));
        let raw = RawParams::from_query("timeout=bogus&cidBase=nope&data=%7Bbad&flag=true");

        let outcome = validator().validate(&schema, &raw);
        let kinds: Vec<_> = outcome.errors.iter().map(FieldError::kind).collect();
        assert_eq!(
            kinds,
            [
                ErrorKind::InvalidDuration,
                ErrorKind::InvalidBaseName,
                ErrorKind::InvalidJson,
            ]
        );
        assert_eq!(outcome.values.get("flag"), Some(&ParamValue::Boolean(true)));
    }

    #[test]
    fn test_default_applied_when_absent() {
        let schema = Schema::new().field(FieldSpec::new("timeout", "timeout").default_value("10s"));

        let outcome = validator().validate(&schema, &RawParams::new());
        assert_eq!(outcome.values.get("timeout"), Some(&ParamValue::Timeout(10_000)));

        let outcome = validator().validate(&schema, &RawParams::from_pairs([("timeout", "1s")]));
        assert_eq!(outcome.values.get("timeout"), Some(&ParamValue::Timeout(1_000)));
    }

    #[test]
    fn test_default_ignored_for_required() {
        let schema = Schema::new().field(
            FieldSpec::new("timeout", "timeout")
                .required()
                .default_value("10s"),
        );
        let outcome = validator().validate(&schema, &RawParams::new());
        assert_eq!(outcome.errors[0].kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_alias_lookup() {
        let schema = Schema::new().field(FieldSpec::new("cidBase", "cidBase").alias("cid-base"));
        let outcome = validator().validate(&schema, &RawParams::from_query("cid-base=base32"));

        let base = outcome.values.get("cidBase").unwrap().as_base_name().unwrap();
        assert_eq!(base.name(), "base32");
    }

    #[test]
    fn test_many_collects_list() {
        let schema = Schema::new().field(FieldSpec::new("timeouts", "timeout").many());
        let raw = RawParams::from_query("timeouts=1s&timeouts=2s");

        let outcome = validator().validate(&schema, &raw);
        assert_eq!(
            outcome.values.get("timeouts"),
            Some(&ParamValue::List(vec![
                ParamValue::Timeout(1_000),
                ParamValue::Timeout(2_000),
            ]))
        );
    }

    #[test]
    fn test_many_accepts_single_value() {
        let schema = Schema::new().field(FieldSpec::new("timeouts", "timeout").many());
        let outcome = validator().validate(&schema, &RawParams::from_query("timeouts=5ms"));

        assert_eq!(
            outcome.values.get("timeouts"),
            Some(&ParamValue::List(vec![ParamValue::Timeout(5)]))
        );
    }

    #[test]
    fn test_many_reports_element_index() {
        let schema = Schema::new().field(FieldSpec::new("timeouts", "timeout").required().many());
        let raw = RawParams::from_pairs([("timeouts", json!(["1s", "bogus", ""]))]);

        let outcome = validator().validate(&schema, &raw);
        assert!(!outcome.values.contains("timeouts"));
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].index, Some(1));
        assert_eq!(outcome.errors[0].kind(), ErrorKind::InvalidDuration);
        assert_eq!(outcome.errors[1].index, Some(2));
        assert_eq!(outcome.errors[1].kind(), ErrorKind::RequiredFieldMissing);
    }

    #[test]
    fn test_many_optional_skips_falsy_elements() {
        let schema = Schema::new().field(FieldSpec::new("timeouts", "timeout").many());
        let raw = RawParams::from_pairs([("timeouts", json!(["", "2s"]))]);

        let outcome = validator().validate(&schema, &raw);
        assert_eq!(
            outcome.values.get("timeouts"),
            Some(&ParamValue::List(vec![ParamValue::Timeout(2_000)]))
        );
    }

    #[test]
    fn test_into_result() {
        let schema = Schema::new().field(FieldSpec::new("arg", "cid").required());

        let errors = validator()
            .validate(&schema, &RawParams::new())
            .into_result()
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("arg").unwrap().kind(), ErrorKind::RequiredFieldMissing);

        let values = validator()
            .validate(&Schema::new(), &RawParams::new())
            .into_result()
            .unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn test_validated_params_remove() {
        let schema = Schema::new().field(FieldSpec::new("name", "string"));
        let mut values = validator()
            .validate(&schema, &RawParams::from_pairs([("name", "docs")]))
            .into_result()
            .unwrap();

        assert_eq!(values.remove("name"), Some(ParamValue::String("docs".to_string())));
        assert!(values.remove("name").is_none());
    }

    #[test]
    fn test_validate_named() {
        let validator = validator().with_schema(
            "ping",
            Schema::new().field(FieldSpec::new("count", "number").default_value(10)),
        );

        let outcome = validator.validate_named("ping", &RawParams::new()).unwrap();
        assert_eq!(
            outcome.values.get("count").unwrap().as_number().unwrap().as_u64(),
            Some(10)
        );

        let error = validator.validate_named("pong", &RawParams::new()).unwrap_err();
        assert_eq!(error, ConfigError::UnknownSchema("pong".to_string()));
    }

    #[test]
    fn test_from_config_rejects_unknown_types() {
        let config = ParamsConfig::from_toml_str(
            r#"
[schemas.broken]
fields = [{ name = "arg", type = "unregistered" }]
"#,
        )
        .unwrap();

        let error = Validator::from_config(PluginRegistry::builtin(), &config).unwrap_err();
        assert_eq!(
            error,
            ConfigError::UnknownType {
                schema: "broken".to_string(),
                field: "arg".to_string(),
                type_name: "unregistered".to_string(),
            }
        );
    }

    #[test]
    fn test_custom_registry() {
        struct Shout;

        impl TypePlugin for Shout {
            fn base(&self) -> crate::domain::BaseKind {
                crate::domain::BaseKind::String
            }

            fn presence(&self) -> PresencePolicy {
                PresencePolicy::AbsentOnly
            }

            fn coerce(&self, raw: &Value) -> Result<ParamValue, crate::domain::CoerceError> {
                Ok(ParamValue::String(raw.as_str().unwrap_or_default().to_uppercase()))
            }
        }

        let mut registry = PluginRegistry::with_builtin();
        registry.register("shout", Shout);
        let validator = Validator::new(Arc::new(registry));

        // AbsentOnly lets an empty string reach the plugin even when required
        let schema = Schema::new().field(FieldSpec::new("word", "shout").required());
        let outcome = validator.validate(&schema, &RawParams::from_pairs([("word", "")]));
        assert_eq!(outcome.values.get("word"), Some(&ParamValue::String(String::new())));

        let outcome = validator.validate(&schema, &RawParams::from_pairs([("word", "hi")]));
        assert_eq!(outcome.values.get("word"), Some(&ParamValue::String("HI".to_string())));
    }
}
