//! Loaded asset values: the decoded profile image and the resume download.

use sha2::{Digest, Sha256};

/// Image container formats the page can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
    WebP,
}

impl ImageFormat {
    /// Number of leading bytes [`ImageFormat::sniff`] needs to recognise every format.
    pub const SIGNATURE_LEN: usize = 12;

    /// Detects the format from the file signature.
    ///
    /// Returns `None` when the bytes do not start with a known signature,
    /// which callers treat as an undecodable image.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

        if bytes.starts_with(PNG) {
            Some(Self::Png)
        } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            Some(Self::Jpeg)
        } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            Some(Self::Gif)
        } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
            Some(Self::WebP)
        } else {
            None
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }
}

/// A profile image that was read and recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub key: String,
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// A file offered as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Download {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Content type derived from the download name's extension.
    pub fn content_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "pdf" => "application/pdf",
            "doc" => "application/msword",
            "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            "txt" => "text/plain; charset=utf-8",
            _ => "application/octet-stream",
        }
    }

    /// `Content-Disposition` value that makes browsers save the file.
    pub fn content_disposition(&self) -> String {
        let safe: String = self
            .file_name
            .chars()
            .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
            .collect();
        format!("attachment; filename=\"{safe}\"")
    }

    /// Strong entity tag: quoted SHA-256 of the contents.
    pub fn etag(&self) -> String {
        format!("\"{}\"", hex::encode(Sha256::digest(&self.bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_known_formats() {
        assert_eq!(
            ImageFormat::sniff(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0]),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::sniff(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(ImageFormat::sniff(b"GIF89a...."), Some(ImageFormat::Gif));
        assert_eq!(
            ImageFormat::sniff(b"RIFF\x10\x00\x00\x00WEBPVP8 "),
            Some(ImageFormat::WebP)
        );
    }

    #[test]
    fn test_sniff_rejects_unknown() {
        assert_eq!(ImageFormat::sniff(b"%PDF-1.7"), None);
        assert_eq!(ImageFormat::sniff(b""), None);
        assert_eq!(ImageFormat::sniff(b"RIFF"), None);
    }

    #[test]
    fn test_download_content_type() {
        assert_eq!(
            Download::new("Resume.PDF", vec![]).content_type(),
            "application/pdf"
        );
        assert_eq!(
            Download::new("resume", vec![]).content_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_content_disposition_strips_quotes() {
        let download = Download::new("my \"cv\".pdf", vec![]);
        assert_eq!(
            download.content_disposition(),
            "attachment; filename=\"my cv.pdf\""
        );
    }

    #[test]
    fn test_etag_is_stable() {
        let a = Download::new("a.pdf", b"hello".to_vec());
        let b = Download::new("b.pdf", b"hello".to_vec());
        assert_eq!(a.etag(), b.etag());
        assert_eq!(
            a.etag(),
            "\"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\""
        );
    }
}
