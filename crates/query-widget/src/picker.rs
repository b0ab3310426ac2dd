//! The widget controller: one initialization sequence, then two
//! user-triggered handlers.

use crate::actions::HostActions;
use crate::error::WidgetError;
use crate::form::{FormConfig, RuleForm, RuleFormFactory};
use filter_schema::descriptor::build_filter_schema;
use query_index::source::IndexSource;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// The query picker widget, ready to react to reset/submit events.
pub struct QueryPicker {
    host: Arc<dyn HostActions>,
    form: Box<dyn RuleForm>,
}

impl std::fmt::Debug for QueryPicker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryPicker").finish_non_exhaustive()
    }
}

impl QueryPicker {
    /// Fetch the property list, derive the filter schema and render the
    /// form. An index fetch failure propagates; there is no partial
    /// initialization.
    pub async fn initialize(
        host: Arc<dyn HostActions>,
        index: &dyn IndexSource,
        factory: &dyn RuleFormFactory,
    ) -> Result<Self, WidgetError> {
        let document = index.fetch().await?;
        info!(properties = document.columns.len(), "building filter schema");

        let filters = build_filter_schema(&document.columns);
        let form = factory.build(FormConfig::new(filters))?;

        Ok(QueryPicker { host, form })
    }

    /// Clear the form's current rule tree. Never touches host actions.
    pub fn reset_rules(&self) {
        self.form.reset();
    }

    /// Read the current rule tree; when non-empty, insert its
    /// pretty-printed JSON into the document and close the widget, in
    /// that order. An empty tree is silently ignored.
    pub fn submit_rules(&self) -> Result<(), WidgetError> {
        let rules = self.form.rules();
        if is_empty_tree(&rules) {
            warn!("submit requested with no rules composed");
            return Ok(());
        }

        let text = serde_json::to_string_pretty(&rules)?;
        self.host.send_text(&text);
        self.host.close_library();
        Ok(())
    }
}

// Matches the plugin contract: no rules surfaces as null or `{}`.
fn is_empty_tree(rules: &Value) -> bool {
    match rules {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}
