pub mod icons;
pub mod styles;
