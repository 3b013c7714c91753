use indexmap::IndexMap;
use serde_json::json;

use crate::error::{ExportError, Result};
use crate::naming;
use crate::tokens::IconRecord;

/// Render the icon manifest module: the closed union of icon names, one
/// import binding per icon and the combined name -> component map.
///
/// Two distinct names that normalize to the same import identifier would
/// silently shadow each other in the emitted module, so that case is rejected
/// here rather than overwritten.
pub fn render(icons: &[IconRecord], import_prefix: &str) -> Result<String> {
    let mut identifiers: IndexMap<String, String> = IndexMap::with_capacity(icons.len());
    let mut views = Vec::with_capacity(icons.len());

    for icon in icons {
        let ident = naming::normalize_identifier(&icon.name);
        if let Some(first) = identifiers.get(&ident) {
            return Err(ExportError::NameCollision {
                identifier: ident,
                first: first.clone(),
                second: icon.name.clone(),
            });
        }
        identifiers.insert(ident.clone(), icon.name.clone());
        views.push(json!({ "name": icon.name, "ident": ident }));
    }

    let handlebars = crate::common::get_handlebars();
    handlebars
        .render_template(
            &get_template(),
            &json!({ "icons": views, "import_prefix": import_prefix }),
        )
        .map_err(|e| ExportError::Other(e.into()))
}

pub fn get_template() -> String {
    let template = r#"export const iconNames = [{{#each icons as |icon|}}"{{icon.name}}"{{#unless @last}},{{/unless}}{{/each}}] as const;

export type iconTypes = typeof iconNames[number];

{{#each icons as |icon|}}
import {{icon.ident}} from '{{../import_prefix}}/{{icon.name}}.svg';
{{/each}}

export const iconMap: { [key in iconTypes]: React.ComponentClass } = {
{{#each icons as |icon|}}
  '{{icon.name}}': {{icon.ident}},
{{/each}}
};
"#;

    template.to_string()
}
