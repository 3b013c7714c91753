use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ExportError, Result};

/// ## Structure
/// This module contains the data structures for the plan file.
///
/// ```text
/// Plan
///   ├── file_id: String
///   ├── icons: IconExport
///   │   ├── assets_dir: String
///   │   ├── manifest_file: String
///   │   ├── import_prefix: String
///   │   └── format: String
///   └── styles: StyleExport
///       ├── typography_file: String
///       └── colors_file: String
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Plan {
    /// Figma file id. Required; there is no usable default.
    #[serde(default)]
    pub file_id: String,
    #[serde(default)]
    pub icons: IconExport,
    #[serde(default)]
    pub styles: StyleExport,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct IconExport {
    pub assets_dir: String,
    pub manifest_file: String,
    /// Import path prefix used inside the generated manifest.
    pub import_prefix: String,
    /// Render format requested from the image endpoint.
    pub format: String,
}

impl Default for IconExport {
    fn default() -> Self {
        Self {
            assets_dir: "dist/icons".to_string(),
            manifest_file: "dist/IconNames.ts".to_string(),
            import_prefix: "../../../public/images/icons".to_string(),
            format: "svg".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct StyleExport {
    pub typography_file: String,
    pub colors_file: String,
}

impl Default for StyleExport {
    fn default() -> Self {
        Self {
            typography_file: "dist/typographySettings.ts".to_string(),
            colors_file: "dist/colorSettings.ts".to_string(),
        }
    }
}

impl Plan {
    pub fn from_file(path: &str) -> Result<Plan> {
        let content = std::fs::read_to_string(path).map_err(|source| ExportError::Io {
            path: Path::new(path).to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| ExportError::Config(format!("{}: {}", path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialization() {
        let plan = Plan {
            file_id: "abc123".to_string(),
            ..Plan::default()
        };

        let yaml_str = serde_yaml::to_string(&plan).unwrap();
        assert!(yaml_str.contains("file_id: abc123"));
        assert!(yaml_str.contains("assets_dir: dist/icons"));
    }

    #[test]
    fn test_deserialization() {
        let yaml_str = r#"
file_id: abc123
icons:
  assets_dir: out/icons
  manifest_file: out/IconNames.ts
styles:
  typography_file: out/typographySettings.ts
"#;

        let plan: Plan = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(plan.file_id, "abc123");
        assert_eq!(plan.icons.assets_dir, "out/icons");
        // Unspecified fields keep their defaults.
        assert_eq!(plan.icons.format, "svg");
        assert_eq!(plan.styles.colors_file, "dist/colorSettings.ts");
    }

    #[test]
    fn default_plan_has_no_file_id() {
        let plan = Plan::default();
        assert!(plan.file_id.is_empty());
    }
}
