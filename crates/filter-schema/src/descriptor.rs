//! Filter descriptors: the per-property schema entries handed to the
//! form-rendering plugin.

use crate::operators::{DATE_OPERATORS, Operator, TEXT_OPERATORS};
use crate::property::{PropertyKind, classify};
use serde::Serialize;

/// Input format enforced for date values.
pub const DATE_FORMAT: &str = "yyyy/mm/dd";

/// Widget the form plugin attaches to date-valued inputs.
pub const DATE_PICKER_PLUGIN: &str = "datepicker";

/// Validation config for a date-valued property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateValidation {
    pub format: String,
}

/// Configuration bundle for the date-picker widget. Field names follow
/// the picker's own option spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePickerConfig {
    pub format: String,

    #[serde(rename = "todayBtn")]
    pub today_btn: String,

    #[serde(rename = "todayHighlight")]
    pub today_highlight: bool,

    pub autoclose: bool,
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        DatePickerConfig {
            format: DATE_FORMAT.to_string(),
            today_btn: "linked".to_string(),
            today_highlight: true,
            autoclose: true,
        }
    }
}

/// Schema entry describing one filterable property: id, label, value
/// kind, allowed operators and optional date-picker configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterDescriptor {
    pub id: String,
    pub label: String,

    #[serde(rename = "type")]
    pub kind: PropertyKind,

    pub operators: Vec<Operator>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<DateValidation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_config: Option<DatePickerConfig>,
}

impl FilterDescriptor {
    /// Build the descriptor for one indexed property. Pure construction,
    /// no error conditions.
    pub fn for_property(name: &str) -> Self {
        let kind = classify(name);
        match kind {
            PropertyKind::Date => FilterDescriptor {
                id: name.to_string(),
                label: name.to_string(),
                kind,
                operators: DATE_OPERATORS.to_vec(),
                validation: Some(DateValidation {
                    format: DATE_FORMAT.to_string(),
                }),
                plugin: Some(DATE_PICKER_PLUGIN.to_string()),
                plugin_config: Some(DatePickerConfig::default()),
            },
            PropertyKind::Text => FilterDescriptor {
                id: name.to_string(),
                label: name.to_string(),
                kind,
                operators: TEXT_OPERATORS.to_vec(),
                validation: None,
                plugin: None,
                plugin_config: None,
            },
        }
    }
}

/// Build one descriptor per property, preserving input order.
pub fn build_filter_schema<S: AsRef<str>>(names: &[S]) -> Vec<FilterDescriptor> {
    names
        .iter()
        .map(|name| FilterDescriptor::for_property(name.as_ref()))
        .collect()
}
