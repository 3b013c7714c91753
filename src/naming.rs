/// Naming rules shared by the icon and style pipelines.
///
/// Figma names arrive as free-form text ("Heading / Large Bold"); the
/// generated modules need stable lowercase keys and valid import bindings.

/// Normalize a raw Figma style or component name into a token key: segments
/// split on `/` and spaces, joined with `-`, lowercased. Runs of separators
/// collapse into a single `-`.
pub fn normalize_style_name(raw: &str) -> String {
    raw.split(|c| c == '/' || c == ' ')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Derive an import binding from a normalized icon name: `-`-separated
/// segments uppercased and concatenated ("arrow-left" -> "ARROWLEFT").
pub fn normalize_identifier(name: &str) -> String {
    name.split('-')
        .map(|segment| segment.to_uppercase())
        .collect::<Vec<_>>()
        .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_name_replaces_slashes_and_spaces() {
        assert_eq!(
            normalize_style_name("Heading / Large Bold"),
            "heading-large-bold"
        );
    }

    #[test]
    fn style_name_lowercases() {
        assert_eq!(normalize_style_name("Primary/Blue"), "primary-blue");
    }

    #[test]
    fn style_name_keeps_already_normalized_input() {
        assert_eq!(normalize_style_name("arrow-left"), "arrow-left");
    }

    #[test]
    fn style_name_collapses_separator_runs() {
        assert_eq!(normalize_style_name("a  / b"), "a-b");
    }

    #[test]
    fn identifier_uppercases_and_joins_segments() {
        assert_eq!(normalize_identifier("arrow-left"), "ARROWLEFT");
        assert_eq!(normalize_identifier("chevron-double-up"), "CHEVRONDOUBLEUP");
    }

    #[test]
    fn identifier_of_single_segment() {
        assert_eq!(normalize_identifier("close"), "CLOSE");
    }
}
