use include_dir::{include_dir, Dir};
use std::path::Path;
use tracing::{error, info};

use crate::common;
use crate::error::Result;

static SAMPLE_DIR: Dir = include_dir!("sample");

pub fn generate_template(emitter: String) {
    info!("Generating emitter template: {}", emitter);
    match emitter.as_str() {
        "icons" => {
            println!("{}", crate::export::to_icon_manifest::get_template());
        }
        "typography" => {
            println!("{}", crate::export::to_typography::get_template());
        }
        "colors" => {
            println!("{}", crate::export::to_colors::get_template());
        }
        _ => {
            error!(
                "Unsupported emitter: {} - use icons, typography, colors",
                emitter
            );
        }
    }
}

/// Extract the embedded sample project into `dir`. Write failures surface as
/// `Io` errors carrying the offending path.
pub fn generate_sample(dir: String) -> Result<()> {
    info!("Generating sample project: {}", dir);
    write_dir_contents(&SAMPLE_DIR, Path::new(&dir))?;
    info!("Sample project generated at: {}", dir);
    Ok(())
}

// Embedded file paths are relative to the sample root, so the target root is
// threaded through the recursion unchanged.
fn write_dir_contents(dir: &Dir, target_root: &Path) -> Result<()> {
    for file in dir.files() {
        let target = target_root.join(file.path());
        common::write_bytes_to_file(&target.to_string_lossy(), file.contents())?;
    }
    for sub_dir in dir.dirs() {
        write_dir_contents(sub_dir, target_root)?;
    }
    Ok(())
}
