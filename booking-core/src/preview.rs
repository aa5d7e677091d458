/// Media-type prefix a file must carry before it is shown as a preview.
pub const IMAGE_TYPE_PREFIX: &str = "image";

const OBJECT_URL_SCHEME: &str = "blob:";

/// Only files whose declared type starts with `image` get a preview; anything
/// else is ignored without feedback.
pub fn is_image_type(mime: &str) -> bool {
    mime.starts_with(IMAGE_TYPE_PREFIX)
}

/// Whether a file input's first file, given by its declared type, should be
/// previewed. An empty selection previews nothing.
pub fn previewable(mime: Option<&str>) -> bool {
    mime.is_some_and(is_image_type)
}

/// `true` for `src` values minted by `URL.createObjectURL`, which must be
/// revoked once the preview stops showing them.
pub fn is_object_url(src: &str) -> bool {
    src.starts_with(OBJECT_URL_SCHEME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_image_types_only() {
        assert!(is_image_type("image/png"));
        assert!(is_image_type("image/svg+xml"));
        assert!(!is_image_type("application/pdf"));
        assert!(!is_image_type("text/plain"));
        assert!(!is_image_type(""));
    }

    #[test]
    fn empty_selection_or_non_image_is_not_previewed() {
        assert!(previewable(Some("image/jpeg")));
        assert!(!previewable(Some("application/zip")));
        assert!(!previewable(Some("")));
        assert!(!previewable(None));
    }

    #[test]
    fn only_blob_sources_need_revoking() {
        assert!(is_object_url(
            "blob:http://localhost:8080/0b6a3c4e-9f1d-4c55-8a3e-2d8f1e6f7a10"
        ));
        assert!(!is_object_url("http://localhost:8080/img/muffin-grey.svg"));
        assert!(!is_object_url("img/muffin-grey.svg"));
        assert!(!is_object_url(""));
    }
}
