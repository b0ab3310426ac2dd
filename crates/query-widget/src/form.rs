//! The seam to the third-party form-rendering plugin.

use crate::error::WidgetError;
use filter_schema::descriptor::FilterDescriptor;
use filter_schema::operators::{FORM_OPERATORS, OperatorDef};
use serde::Serialize;
use serde_json::Value;

/// Auxiliary plugins loaded alongside the rule builder.
pub const FORM_PLUGINS: &[&str] = &["bt-tooltip-errors"];

/// Everything the form plugin is instantiated with: the derived filter
/// schema plus the static operator table.
#[derive(Debug, Clone, Serialize)]
pub struct FormConfig {
    pub plugins: Vec<String>,
    pub filters: Vec<FilterDescriptor>,
    pub operators: Vec<OperatorDef>,
}

impl FormConfig {
    pub fn new(filters: Vec<FilterDescriptor>) -> Self {
        FormConfig {
            plugins: FORM_PLUGINS.iter().map(|p| p.to_string()).collect(),
            filters,
            operators: FORM_OPERATORS.to_vec(),
        }
    }
}

/// An instantiated rule-builder form. The rule tree lives entirely inside
/// the plugin; the widget only resets it or reads it back.
pub trait RuleForm: Send + Sync {
    /// Drop every rule currently composed in the form.
    fn reset(&self);

    /// The current rule tree. `Value::Null` or an empty object means no
    /// rules are composed.
    fn rules(&self) -> Value;
}

/// Instantiates the form plugin from a [`FormConfig`].
pub trait RuleFormFactory: Send + Sync {
    fn build(&self, config: FormConfig) -> Result<Box<dyn RuleForm>, WidgetError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use filter_schema::descriptor::build_filter_schema;

    #[test]
    fn config_carries_plugins_schema_and_operator_table() {
        let config = FormConfig::new(build_filter_schema(&["title", "releasedate"]));

        assert_eq!(config.plugins, vec!["bt-tooltip-errors"]);
        assert_eq!(config.filters.len(), 2);
        assert_eq!(config.operators.len(), FORM_OPERATORS.len());
    }
}
