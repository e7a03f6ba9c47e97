//! Filename manipulation.

/// Get the base of a WordPress upload file name.
///
/// Images uploaded to WordPress get resized copies with dimensions added
/// to the file name. This recovers the base name of such files: both
/// `"PXL_20230712_140220022.jpg"` and `"PXL_20230712_140220022-150x150.jpg"`
/// return `"PXL_20230712_140220022"`.
///
/// The name is truncated at the last `-`, falling back to the last `.`.
/// A separator at position 0 is treated as absent, matching the upstream
/// behavior this helper mirrors; with no usable separator the result is
/// the empty string.
pub fn wordpress_upload_base_name(filename: &str) -> &str {
    let pos = filename
        .rfind('-')
        .filter(|&pos| pos > 0)
        .or_else(|| filename.rfind('.').filter(|&pos| pos > 0));

    match pos {
        Some(pos) => &filename[..pos],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_dimension_suffix() {
        assert_eq!(
            wordpress_upload_base_name("PXL_20230712_140220022-150x150.jpg"),
            "PXL_20230712_140220022"
        );
    }

    #[test]
    fn test_base_name_strips_extension_when_no_dash() {
        assert_eq!(wordpress_upload_base_name("image.png"), "image");
        assert_eq!(wordpress_upload_base_name("photo.jpg"), "photo");
    }

    #[test]
    fn test_base_name_uses_last_dash() {
        assert_eq!(
            wordpress_upload_base_name("my-image-300x200.png"),
            "my-image"
        );
    }

    #[test]
    fn test_base_name_without_separators_is_empty() {
        assert_eq!(wordpress_upload_base_name("noseparators"), "");
        assert_eq!(wordpress_upload_base_name(""), "");
    }

    #[test]
    fn test_base_name_leading_separator_counts_as_absent() {
        // A dash at position 0 falls through to the extension lookup, and a
        // lone leading dot yields nothing at all.
        assert_eq!(wordpress_upload_base_name("-150x150.jpg"), "-150x150");
        assert_eq!(wordpress_upload_base_name(".hidden"), "");
    }
}
