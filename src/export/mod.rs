pub mod to_colors;
pub mod to_icon_manifest;
pub mod to_typography;
