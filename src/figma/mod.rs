pub mod client;
pub mod types;

pub use client::FigmaClient;
pub use types::{
    Color, Component, FigmaFile, Node, NodeWrapper, Paint, StyleRef, StyleType, TypeStyle,
};
