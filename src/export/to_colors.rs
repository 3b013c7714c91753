use serde_json::json;

use crate::error::{ExportError, Result};
use crate::tokens::ColorRecord;

/// Render the color module: a constant map from style name to fill string.
pub fn render(styles: &[ColorRecord]) -> Result<String> {
    let handlebars = crate::common::get_handlebars();
    handlebars
        .render_template(&get_template(), &json!({ "styles": styles }))
        .map_err(|e| ExportError::Other(e.into()))
}

pub fn get_template() -> String {
    let template = r#"export const colorSettings = {
{{#each styles as |style|}}
  "{{style.style_name}}": "{{style.fill}}",
{{/each}}
};
"#;

    template.to_string()
}
