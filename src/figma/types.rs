use indexmap::IndexMap;
use serde::Deserialize;

/// Subset of the Figma file payload the pipelines consume. `IndexMap` keeps
/// the registry iteration order the API returned, which fixes the order of
/// the emitted modules.
#[derive(Debug, Clone, Deserialize)]
pub struct FigmaFile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: IndexMap<String, Component>,
    #[serde(default)]
    pub styles: IndexMap<String, StyleRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRef {
    pub name: String,
    pub style_type: StyleType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StyleType {
    Text,
    Fill,
    Effect,
    Grid,
}

/// Response of the batched image-render endpoint. A `None` url means the node
/// could not be rendered; the caller filters it out.
#[derive(Debug, Clone, Deserialize)]
pub struct ImageResponse {
    #[serde(default)]
    pub err: Option<String>,
    #[serde(default)]
    pub images: IndexMap<String, Option<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
    #[serde(default)]
    pub nodes: IndexMap<String, NodeWrapper>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodeWrapper {
    pub document: Node,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub style: Option<TypeStyle>,
    #[serde(default)]
    pub fills: Vec<Paint>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    #[serde(default)]
    pub font_family: String,
    #[serde(default)]
    pub font_size: f64,
    #[serde(default)]
    pub letter_spacing: f64,
    #[serde(default)]
    pub line_height_px: f64,
    #[serde(default)]
    pub font_weight: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paint {
    #[serde(default)]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}
