use indexmap::IndexSet;
use serde::Serialize;

use crate::figma::{Color, TypeStyle};
use crate::naming;

/// Pixel size of one rem in the consuming codebase.
pub const REM_SIZE: f64 = 16.0;

/// A renderable icon component: normalized name plus the url of its rendered
/// image. Records with no rendered image are filtered out before this type is
/// constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconRecord {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyRecord {
    pub style_name: String,
    pub font_family: String,
    pub font_size: f64,
    pub letter_spacing: f64,
    pub line_height_px: f64,
    pub font_weight: f64,
}

impl TypographyRecord {
    pub fn from_style(raw_name: &str, style: &TypeStyle) -> Self {
        Self {
            style_name: naming::normalize_style_name(raw_name),
            font_family: style.font_family.clone(),
            font_size: style.font_size,
            letter_spacing: style.letter_spacing,
            line_height_px: style.line_height_px,
            font_weight: style.font_weight,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorRecord {
    pub style_name: String,
    pub fill: String,
}

impl ColorRecord {
    pub fn from_fill(raw_name: &str, color: Color) -> Self {
        Self {
            style_name: naming::normalize_style_name(raw_name),
            fill: fill_to_css(color),
        }
    }
}

/// Drop later records whose name matches an earlier one exactly, keeping
/// first-seen order. A duplicate is dropped even when its link differs.
pub fn dedup_icons(records: Vec<IconRecord>) -> Vec<IconRecord> {
    let mut seen: IndexSet<String> = IndexSet::with_capacity(records.len());
    records
        .into_iter()
        .filter(|record| seen.insert(record.name.clone()))
        .collect()
}

/// Convert a pixel value to a rem string at the fixed base size.
/// 32px -> "2rem", 48px -> "3rem".
pub fn px_to_rem(px: f64) -> String {
    format!("{}rem", fmt_number(px / REM_SIZE))
}

/// Shortest decimal rendering of a value: whole numbers print without a
/// fractional part (2.0 -> "2", 0.5 -> "0.5"), matching how the consuming
/// code expects numbers in the generated source.
pub fn fmt_number(value: f64) -> String {
    format!("{}", value)
}

/// Encode a fill color for the generated color module.
///
/// Fully opaque fills become `#rrggbb` with each channel multiplied by 255
/// and truncated toward zero. Translucent fills become `rgba(r, g, b, a)`
/// with channels multiplied by 255 *without* truncation and alpha scaled to
/// 0-100. The truncated/untruncated asymmetry is part of the output contract
/// consumed downstream; keep both paths as they are.
pub fn fill_to_css(color: Color) -> String {
    if color.a == 1.0 {
        format!(
            "#{}{}{}",
            channel_hex(color.r),
            channel_hex(color.g),
            channel_hex(color.b)
        )
    } else {
        format!(
            "rgba({}, {}, {}, {})",
            fmt_number(color.r * 255.0),
            fmt_number(color.g * 255.0),
            fmt_number(color.b * 255.0),
            fmt_number(color.a * 100.0)
        )
    }
}

fn channel_hex(channel: f64) -> String {
    format!("{:02x}", (channel * 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(name: &str, link: &str) -> IconRecord {
        IconRecord {
            name: name.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn black_encodes_as_hex() {
        let color = Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(fill_to_css(color), "#000000");
    }

    #[test]
    fn white_encodes_as_hex() {
        let color = Color {
            r: 1.0,
            g: 1.0,
            b: 1.0,
            a: 1.0,
        };
        assert_eq!(fill_to_css(color), "#ffffff");
    }

    #[test]
    fn translucent_red_encodes_as_rgba() {
        let color = Color {
            r: 1.0,
            g: 0.0,
            b: 0.0,
            a: 0.5,
        };
        assert_eq!(fill_to_css(color), "rgba(255, 0, 0, 50)");
    }

    #[test]
    fn rgba_channels_are_not_truncated() {
        let color = Color {
            r: 0.5,
            g: 0.0,
            b: 0.0,
            a: 0.5,
        };
        assert_eq!(fill_to_css(color), "rgba(127.5, 0, 0, 50)");
    }

    #[test]
    fn hex_channels_truncate_toward_zero() {
        // 0.999 * 255 = 254.745, which truncates to 254 (0xfe).
        let color = Color {
            r: 0.999,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(fill_to_css(color), "#fe0000");
    }

    #[test]
    fn px_to_rem_divides_by_base() {
        assert_eq!(px_to_rem(32.0), "2rem");
        assert_eq!(px_to_rem(48.0), "3rem");
        assert_eq!(px_to_rem(14.0), "0.875rem");
    }

    #[test]
    fn fmt_number_drops_trailing_fraction() {
        assert_eq!(fmt_number(2.0), "2");
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(400.0), "400");
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let records = vec![
            icon("arrow-left", "https://cdn.example/1"),
            icon("close", "https://cdn.example/2"),
            icon("arrow-left", "https://cdn.example/3"),
        ];
        let deduped = dedup_icons(records);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0], icon("arrow-left", "https://cdn.example/1"));
        assert_eq!(deduped[1], icon("close", "https://cdn.example/2"));
    }

    #[test]
    fn dedup_is_idempotent() {
        let records = vec![
            icon("a", "1"),
            icon("b", "2"),
            icon("a", "3"),
            icon("b", "4"),
        ];
        let once = dedup_icons(records);
        let twice = dedup_icons(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn typography_record_normalizes_its_name() {
        let style = TypeStyle {
            font_family: "Inter".to_string(),
            font_size: 32.0,
            letter_spacing: 0.0,
            line_height_px: 48.0,
            font_weight: 700.0,
        };
        let record = TypographyRecord::from_style("Heading / Large Bold", &style);
        assert_eq!(record.style_name, "heading-large-bold");
        assert_eq!(record.font_size, 32.0);
    }
}
