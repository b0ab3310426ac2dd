//! Comparison operator identifiers and the static operator table handed to
//! the form-rendering plugin.

use serde::Serialize;

/// Every operator type the form plugin knows about. Serialized as the
/// snake_case identifiers the plugin expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equal,
    NotEqual,
    In,
    NotIn,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Between,
    NotBetween,
    BeginsWith,
    NotBeginsWith,
    Contains,
    NotContains,
    EndsWith,
    NotEndsWith,
    IsNotEmpty,
    IsNull,
    IsNotNull,
    Before,
    After,
}

/// Operators offered for date-valued properties.
pub const DATE_OPERATORS: &[Operator] = &[Operator::Before, Operator::After, Operator::Equal];

/// Operators offered for string-valued properties.
pub const TEXT_OPERATORS: &[Operator] = &[
    Operator::Equal,
    Operator::NotEqual,
    Operator::Contains,
    Operator::NotContains,
    Operator::IsNull,
    Operator::IsNotNull,
    Operator::IsNotEmpty,
];

/// One entry of the form plugin's operator table. Optional fields are
/// omitted from the serialized form when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperatorDef {
    #[serde(rename = "type")]
    pub op: Operator,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_inputs: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_to: Option<&'static [&'static str]>,
}

impl OperatorDef {
    const fn plain(op: Operator) -> Self {
        OperatorDef {
            op,
            nb_inputs: None,
            multiple: None,
            apply_to: None,
        }
    }
}

/// The full operator table the form plugin is instantiated with.
///
/// Broader than any single property's operator list; the plugin restricts
/// per property at render time. Several entries (`in`, `not_in`, `less`,
/// `greater`, `between`, ...) are never referenced by a generated filter
/// descriptor but stay in the table as configuration.
pub static FORM_OPERATORS: &[OperatorDef] = &[
    OperatorDef::plain(Operator::Equal),
    OperatorDef::plain(Operator::NotEqual),
    OperatorDef::plain(Operator::In),
    OperatorDef::plain(Operator::NotIn),
    OperatorDef::plain(Operator::Less),
    OperatorDef::plain(Operator::LessOrEqual),
    OperatorDef::plain(Operator::Greater),
    OperatorDef::plain(Operator::GreaterOrEqual),
    OperatorDef::plain(Operator::Between),
    OperatorDef::plain(Operator::NotBetween),
    OperatorDef::plain(Operator::BeginsWith),
    OperatorDef::plain(Operator::NotBeginsWith),
    OperatorDef::plain(Operator::Contains),
    OperatorDef::plain(Operator::NotContains),
    OperatorDef::plain(Operator::EndsWith),
    OperatorDef::plain(Operator::NotEndsWith),
    OperatorDef::plain(Operator::IsNotEmpty),
    OperatorDef::plain(Operator::IsNull),
    OperatorDef::plain(Operator::IsNotNull),
    OperatorDef {
        op: Operator::Before,
        nb_inputs: Some(1),
        multiple: Some(false),
        apply_to: Some(&["date"]),
    },
    OperatorDef {
        op: Operator::After,
        nb_inputs: Some(1),
        multiple: None,
        apply_to: Some(&["date"]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_serialize_as_snake_case() {
        let json = serde_json::to_value(Operator::NotBeginsWith).unwrap();
        assert_eq!(json, serde_json::json!("not_begins_with"));
        let json = serde_json::to_value(Operator::IsNotEmpty).unwrap();
        assert_eq!(json, serde_json::json!("is_not_empty"));
    }

    #[test]
    fn form_table_keeps_date_restrictions() {
        let before = FORM_OPERATORS
            .iter()
            .find(|def| def.op == Operator::Before)
            .unwrap();
        assert_eq!(before.nb_inputs, Some(1));
        assert_eq!(before.multiple, Some(false));
        assert_eq!(before.apply_to, Some(&["date"][..]));

        let after = FORM_OPERATORS
            .iter()
            .find(|def| def.op == Operator::After)
            .unwrap();
        assert_eq!(after.nb_inputs, Some(1));
        assert_eq!(after.multiple, None);
        assert_eq!(after.apply_to, Some(&["date"][..]));
    }

    #[test]
    fn plain_entries_serialize_to_type_only() {
        let json = serde_json::to_value(&FORM_OPERATORS[0]).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "equal" }));
    }
}
