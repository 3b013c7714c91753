use futures::future::join_all;
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::common;
use crate::error::Result;
use crate::export::to_icon_manifest;
use crate::figma::{FigmaClient, FigmaFile};
use crate::naming;
use crate::plan::IconExport;
use crate::tokens::{dedup_icons, IconRecord};

/// Extract icon components from a file, download their rendered images and
/// emit the icon manifest module.
///
/// Per-node render gaps (a null image url) are tolerated and filtered out; a
/// failed download or asset write aborts the run before the manifest is
/// touched.
pub async fn run(
    client: &FigmaClient,
    file_id: &str,
    file: &FigmaFile,
    config: &IconExport,
) -> Result<()> {
    let node_ids: Vec<String> = file.components.keys().cloned().collect();
    info!("Found {} icon components", node_ids.len());

    let images = if node_ids.is_empty() {
        IndexMap::new()
    } else {
        client
            .get_image_urls(file_id, &node_ids, &config.format)
            .await?
    };

    let records = dedup_icons(extract_icon_records(file, &images));
    info!("Exporting {} icons after filtering and dedup", records.len());

    // Downloads run concurrently; every one must settle before anything is
    // emitted.
    let downloads = records.iter().map(|record| client.download(&record.link));
    let mut contents = Vec::with_capacity(records.len());
    for result in join_all(downloads).await {
        contents.push(result?);
    }

    emit(&records, &contents, config)
}

/// Persist every asset, then the manifest. A failed asset write aborts before
/// the manifest is touched: a manifest entry must never point at an asset
/// that was not written in this run.
pub fn emit(records: &[IconRecord], contents: &[Vec<u8>], config: &IconExport) -> Result<()> {
    write_assets(records, contents, config)?;

    let manifest = to_icon_manifest::render(records, &config.import_prefix)?;
    common::write_string_to_file(&config.manifest_file, &manifest)?;
    info!("Wrote icon manifest: {}", config.manifest_file);

    Ok(())
}

pub fn write_assets(records: &[IconRecord], contents: &[Vec<u8>], config: &IconExport) -> Result<()> {
    for (record, bytes) in records.iter().zip(contents) {
        let path = asset_path(config, record);
        common::write_bytes_to_file(&path, bytes)?;
        debug!("Wrote asset: {}", path);
    }
    Ok(())
}

/// Join each component with its rendered image url, in registry order.
/// Components whose url came back null are unexported in Figma and are
/// dropped here.
pub fn extract_icon_records(
    file: &FigmaFile,
    images: &IndexMap<String, Option<String>>,
) -> Vec<IconRecord> {
    file.components
        .iter()
        .filter_map(|(id, component)| {
            let link = images.get(id).cloned().flatten();
            match link {
                Some(link) => Some(IconRecord {
                    name: naming::normalize_style_name(&component.name),
                    link,
                }),
                None => {
                    debug!("Skipping unrenderable icon '{}' ({})", component.name, id);
                    None
                }
            }
        })
        .collect()
}

pub fn asset_path(config: &IconExport, record: &IconRecord) -> String {
    format!("{}/{}.svg", config.assets_dir, record.name)
}
