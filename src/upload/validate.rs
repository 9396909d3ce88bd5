//! Acceptance rules for the profile picture, kept free of UI state so the
//! widget stays thin.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Hard cap on local files: 5 MiB.
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Declared types accepted from a local file.
pub const ACCEPTED_MIME_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// A URL must contain one of these anywhere in it (not just as a suffix, so
/// extensions hidden in query strings still pass).
const URL_IMAGE_MARKERS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".webp", ".bmp"];

/// One failure kind per way an acquisition attempt can go wrong. The display
/// string is the single message the widget surfaces; none of these are fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Unsupported file type ({0}). Use a JPG, PNG, GIF or WebP image.")]
    UnsupportedFileType(String),

    #[error("File is too large ({0} bytes). The limit is 5 MB.")]
    FileTooLarge(usize),

    #[error("The selected file could not be read.")]
    ReadFailed,

    #[error("The URL does not look like an image link (.jpg, .jpeg, .png, .gif, .webp or .bmp).")]
    InvalidUrlExtension,

    #[error("The URL could not be reached or does not point to an image.")]
    UrlNotAnImage,

    #[error("The image could not be displayed and was removed.")]
    DisplayFailed,
}

/// Resolve the declared type of a file. Browsers hand us a MIME string for
/// dropped files; the native picker only has the file name, so the extension
/// stands in for the declaration there.
pub fn resolve_file_type(file_name: &str, declared: Option<&str>) -> Result<String, UploadError> {
    if let Some(mime) = declared.filter(|m| !m.is_empty()) {
        let mime = mime.to_ascii_lowercase();
        if ACCEPTED_MIME_TYPES.contains(&mime.as_str()) {
            return Ok(mime);
        }
        return Err(UploadError::UnsupportedFileType(mime));
    }

    let extension = Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => Ok("image/jpeg".to_string()),
        Some("png") => Ok("image/png".to_string()),
        Some("gif") => Ok("image/gif".to_string()),
        Some("webp") => Ok("image/webp".to_string()),
        Some(other) => Err(UploadError::UnsupportedFileType(format!(".{}", other))),
        None => Err(UploadError::UnsupportedFileType(file_name.to_string())),
    }
}

pub fn check_file_size(len: usize) -> Result<(), UploadError> {
    if len > MAX_FILE_BYTES {
        return Err(UploadError::FileTooLarge(len));
    }
    Ok(())
}

/// Base64 data URI for the file contents, e.g. `data:image/png;base64,...`.
pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Decode the payload of a data URI produced by [`encode_data_uri`].
pub fn decode_data_uri(value: &str) -> Result<Vec<u8>, UploadError> {
    let payload = value
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or(UploadError::DisplayFailed)?;

    STANDARD
        .decode(payload)
        .map_err(|_| UploadError::DisplayFailed)
}

/// Case-insensitive substring scan for an image extension.
pub fn has_image_extension(url: &str) -> bool {
    let lowered = url.to_lowercase();
    URL_IMAGE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}

/// Decide whether a settled HEAD probe lets the URL through: the request
/// must have returned an OK status and an `image/*` content type.
pub fn probe_verdict(ok_status: bool, content_type: Option<&str>) -> Result<(), UploadError> {
    let is_image = content_type
        .map(|value| value.trim_start().to_ascii_lowercase().starts_with("image/"))
        .unwrap_or(false);

    if ok_status && is_image {
        Ok(())
    } else {
        Err(UploadError::UrlNotAnImage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_image_files() {
        assert_eq!(resolve_file_type("photo.PNG", None).unwrap(), "image/png");
        assert_eq!(resolve_file_type("me.jpeg", None).unwrap(), "image/jpeg");
        assert_eq!(
            resolve_file_type("anything", Some("image/webp")).unwrap(),
            "image/webp"
        );
    }

    #[test]
    fn rejects_non_image_files_with_type_error() {
        assert_eq!(
            resolve_file_type("cv.pdf", Some("application/pdf")),
            Err(UploadError::UnsupportedFileType("application/pdf".to_string()))
        );
        assert_eq!(
            resolve_file_type("cv.pdf", None),
            Err(UploadError::UnsupportedFileType(".pdf".to_string()))
        );
        assert!(resolve_file_type("README", None).is_err());
    }

    #[test]
    fn size_limit_is_five_mebibytes() {
        assert!(check_file_size(4 * 1024 * 1024).is_ok());
        assert!(check_file_size(MAX_FILE_BYTES).is_ok());
        assert_eq!(
            check_file_size(6 * 1024 * 1024),
            Err(UploadError::FileTooLarge(6 * 1024 * 1024))
        );
    }

    #[test]
    fn four_mebibyte_png_encodes_to_a_png_data_uri() {
        let bytes = vec![0u8; 4 * 1024 * 1024];
        let mime = resolve_file_type("photo.png", Some("image/png")).unwrap();
        check_file_size(bytes.len()).unwrap();

        let uri = encode_data_uri(&mime, &bytes);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn data_uri_decode_rejects_foreign_strings() {
        assert_eq!(
            decode_data_uri("https://example.com/photo.jpg"),
            Err(UploadError::DisplayFailed)
        );
        assert_eq!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(UploadError::DisplayFailed)
        );
        assert_eq!(decode_data_uri("data:image/png;base64,aGk=").unwrap(), b"hi");
    }

    #[test]
    fn url_extension_scan_is_substring_based() {
        assert!(has_image_extension("https://example.com/photo.jpg"));
        assert!(has_image_extension("https://example.com/PHOTO.JPG"));
        // Extension buried in a query parameter still passes
        assert!(has_image_extension("https://example.com/fetch?file=pic.png&v=2"));
        assert!(!has_image_extension("https://example.com/page.html"));
        assert!(!has_image_extension("https://example.com/doc.pdf"));
    }

    #[test]
    fn probe_verdict_needs_ok_status_and_image_content() {
        assert!(probe_verdict(true, Some("image/jpeg")).is_ok());
        assert!(probe_verdict(true, Some("image/png; charset=binary")).is_ok());
        assert_eq!(
            probe_verdict(true, Some("application/pdf")),
            Err(UploadError::UrlNotAnImage)
        );
        assert_eq!(
            probe_verdict(false, Some("image/png")),
            Err(UploadError::UrlNotAnImage)
        );
        assert_eq!(probe_verdict(true, None), Err(UploadError::UrlNotAnImage));
    }
}
