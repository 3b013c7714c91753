use serde_json::json;

use crate::error::{ExportError, Result};
use crate::tokens::{fmt_number, px_to_rem, TypographyRecord};

/// Render the typography module: a closed union of style names and a dispatch
/// function returning the attributes per case.
///
/// The default case returns `{ fontSize: 14 }` on purpose: the generated type
/// and the live Figma data can drift apart, and a runtime value outside the
/// union must still produce something usable. Keep the fallback.
pub fn render(styles: &[TypographyRecord]) -> Result<String> {
    let views: Vec<_> = styles
        .iter()
        .map(|style| {
            json!({
                "style_name": style.style_name,
                "font_family": style.font_family,
                "font_size_rem": px_to_rem(style.font_size),
                "letter_spacing": fmt_number(style.letter_spacing),
                "line_height_rem": px_to_rem(style.line_height_px),
                "font_weight": fmt_number(style.font_weight),
            })
        })
        .collect();

    let handlebars = crate::common::get_handlebars();
    handlebars
        .render_template(&get_template(), &json!({ "styles": views }))
        .map_err(|e| ExportError::Other(e.into()))
}

pub fn get_template() -> String {
    let template = r#"type TypographyNames = {{#each styles as |style|}}'{{style.style_name}}'{{#unless @last}} | {{/unless}}{{/each}};

export const typographySettings = (value: TypographyNames) => {
  switch (value) {
{{#each styles as |style|}}
    case '{{style.style_name}}':
      return {
        fontFamily: "{{style.font_family}}",
        fontSize: "{{style.font_size_rem}}",
        letterSpacing: {{style.letter_spacing}},
        lineHeight: "{{style.line_height_rem}}",
        fontWeight: "{{style.font_weight}}"
      };
{{/each}}
    default:
      return {
        fontSize: 14,
      };
  }
};
"#;

    template.to_string()
}
