use indexmap::IndexMap;
use tracing::{info, warn};

use crate::common;
use crate::error::Result;
use crate::export::{to_colors, to_typography};
use crate::figma::{FigmaClient, FigmaFile, NodeWrapper, StyleType};
use crate::plan::StyleExport;
use crate::tokens::{ColorRecord, TypographyRecord};

/// Partition the file's named styles into typography and color groups, fetch
/// their node details and emit the two token modules.
///
/// A group with no styles produces no module: a zero-case union type is not
/// valid output.
pub async fn run(
    client: &FigmaClient,
    file_id: &str,
    file: &FigmaFile,
    config: &StyleExport,
) -> Result<()> {
    let typography_ids = style_ids(file, StyleType::Text);
    let color_ids = style_ids(file, StyleType::Fill);
    info!(
        "Found {} typography styles and {} color styles",
        typography_ids.len(),
        color_ids.len()
    );

    if typography_ids.is_empty() {
        warn!("No typography styles in file; {} not written", config.typography_file);
    } else {
        let nodes = client.get_file_nodes(file_id, &typography_ids).await?;
        let records = typography_records(&typography_ids, &nodes);
        let rendered = to_typography::render(&records)?;
        common::write_string_to_file(&config.typography_file, &rendered)?;
        info!("Wrote typography module: {}", config.typography_file);
    }

    if color_ids.is_empty() {
        warn!("No color styles in file; {} not written", config.colors_file);
    } else {
        let nodes = client.get_file_nodes(file_id, &color_ids).await?;
        let records = color_records(&color_ids, &nodes);
        let rendered = to_colors::render(&records)?;
        common::write_string_to_file(&config.colors_file, &rendered)?;
        info!("Wrote color module: {}", config.colors_file);
    }

    Ok(())
}

/// Ids of the registry's styles with the given type, in registry order.
pub fn style_ids(file: &FigmaFile, style_type: StyleType) -> Vec<String> {
    file.styles
        .iter()
        .filter(|(_, style)| style.style_type == style_type)
        .map(|(id, _)| id.clone())
        .collect()
}

pub fn typography_records(
    ids: &[String],
    nodes: &IndexMap<String, NodeWrapper>,
) -> Vec<TypographyRecord> {
    ids.iter()
        .filter_map(|id| {
            let node = match nodes.get(id) {
                Some(node) => &node.document,
                None => {
                    warn!("Typography style {} missing from node response", id);
                    return None;
                }
            };
            match &node.style {
                Some(style) if node.kind == "TEXT" => {
                    Some(TypographyRecord::from_style(&node.name, style))
                }
                Some(_) => {
                    warn!(
                        "Node '{}' ({}) is a {} node, not TEXT",
                        node.name, id, node.kind
                    );
                    None
                }
                None => {
                    warn!("Node '{}' ({}) carries no text style", node.name, id);
                    None
                }
            }
        })
        .collect()
}

pub fn color_records(ids: &[String], nodes: &IndexMap<String, NodeWrapper>) -> Vec<ColorRecord> {
    ids.iter()
        .filter_map(|id| {
            let node = match nodes.get(id) {
                Some(node) => &node.document,
                None => {
                    warn!("Color style {} missing from node response", id);
                    return None;
                }
            };
            match node.fills.first().and_then(|fill| fill.color) {
                Some(color) => Some(ColorRecord::from_fill(&node.name, color)),
                None => {
                    warn!("Node '{}' ({}) carries no solid fill", node.name, id);
                    None
                }
            }
        })
        .collect()
}
