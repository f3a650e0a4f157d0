use crate::attributes::string_attribute;
use crate::error::OiioError;

/// One file format and the filename extensions it claims, from the
/// `extension_list` global attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatExtensions {
    pub format: String,
    pub extensions: Vec<String>,
}

/// Names of the image formats the loaded library supports, from the
/// `format_list` global attribute.
pub fn format_list() -> Result<Vec<String>, OiioError> {
    let raw = string_attribute("format_list")?.unwrap_or_default();
    Ok(parse_format_list(&raw))
}

/// Per-format filename extensions, from the `extension_list` global
/// attribute.
pub fn extension_map() -> Result<Vec<FormatExtensions>, OiioError> {
    let raw = string_attribute("extension_list")?.unwrap_or_default();
    Ok(parse_extension_list(&raw))
}

/// `format_list` is a comma-separated list of format names.
pub(crate) fn parse_format_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// `extension_list` uses `fmt:ext,ext;fmt:ext` syntax.
pub(crate) fn parse_extension_list(raw: &str) -> Vec<FormatExtensions> {
    raw.split(';')
        .filter_map(|entry| {
            let (format, extensions) = entry.split_once(':')?;
            if format.is_empty() {
                return None;
            }
            Some(FormatExtensions {
                format: format.to_owned(),
                extensions: extensions
                    .split(',')
                    .filter(|ext| !ext.is_empty())
                    .map(str::to_owned)
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_list_splits_on_commas() {
        let formats = parse_format_list("bmp,jpeg,openexr,tiff");
        assert_eq!(formats, ["bmp", "jpeg", "openexr", "tiff"]);
    }

    #[test]
    fn test_parse_format_list_empty_input_is_empty() {
        assert!(parse_format_list("").is_empty());
    }

    #[test]
    fn test_parse_format_list_drops_empty_segments() {
        let formats = parse_format_list("bmp,,tiff");
        assert_eq!(formats, ["bmp", "tiff"]);
    }

    #[test]
    fn test_parse_extension_list_maps_formats_to_extensions() {
        let map = parse_extension_list("openexr:exr,sxr;tiff:tif,tiff");
        assert_eq!(map.len(), 2);
        assert_eq!(map[0].format, "openexr");
        assert_eq!(map[0].extensions, ["exr", "sxr"]);
        assert_eq!(map[1].format, "tiff");
        assert_eq!(map[1].extensions, ["tif", "tiff"]);
    }

    #[test]
    fn test_parse_extension_list_skips_entries_without_colon() {
        let map = parse_extension_list("garbage;jpeg:jpg,jpeg");
        assert_eq!(map.len(), 1);
        assert_eq!(map[0].format, "jpeg");
    }

    #[test]
    fn test_parse_extension_list_format_without_extensions() {
        let map = parse_extension_list("null:");
        assert_eq!(map.len(), 1);
        assert_eq!(map[0].format, "null");
        assert!(map[0].extensions.is_empty());
    }
}
