//! Media-type classification over the leading bytes of a stream.
//!
//! The signature database itself belongs to [`infer`]; this module owns the thin record
//! type the decorators store, and the allow-list pattern matching they gate with. Buffers
//! that match no known signature classify as `application/octet-stream`, so [`classify`]
//! always produces a usable type.

use core::fmt;

/// A classified media type, as produced by [`classify`].
///
/// Carries the canonical `type/subtype` string along with the conventional file extension
/// for the format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaType {
    mime: &'static str,
    extension: &'static str,
}

impl MediaType {
    /// The fallback for content that matches no known signature.
    pub const OCTET_STREAM: Self = Self { mime: "application/octet-stream", extension: "bin" };

    /// Returns the canonical `type/subtype` string.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.mime
    }

    /// Returns the conventional file extension for this media type.
    #[inline]
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Checks this media type against a single allow-list pattern.
    ///
    /// A pattern is either an exact media type (`"image/png"`) or a top-level wildcard
    /// (`"image/*"`), which matches every subtype under that top-level type. `"*/*"`
    /// matches everything.
    ///
    /// # Example
    /// ```
    /// # use sniffgate_core::detect::classify;
    /// let media = classify(b"%PDF-1.5");
    /// assert!(media.matches("application/pdf"));
    /// assert!(media.matches("application/*"));
    /// assert!(!media.matches("image/*"));
    /// ```
    #[must_use]
    pub fn matches(&self, pattern: &str) -> bool {
        match pattern.strip_suffix("/*") {
            Some("*") => true,
            Some(top) => self.mime.split_once('/').is_some_and(|(kind, _)| kind == top),
            None => self.mime == pattern,
        }
    }

    /// Checks this media type against an ordered sequence of patterns. The first matching
    /// pattern wins; an empty sequence matches nothing.
    #[must_use]
    pub fn matches_any<I, S>(&self, patterns: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        patterns.into_iter().any(|pattern| self.matches(pattern.as_ref()))
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.mime)
    }
}

impl AsRef<str> for MediaType {
    #[inline]
    fn as_ref(&self) -> &str {
        self.mime
    }
}

/// Classifies a byte sample by signature inspection.
///
/// Only the bytes actually provided are inspected; most signatures need no more than the
/// first few dozen bytes of a stream. Content that matches no known signature (including
/// an empty sample) is reported as [`MediaType::OCTET_STREAM`].
#[must_use]
pub fn classify(buffer: &[u8]) -> MediaType {
    match infer::get(buffer) {
        Some(kind) => MediaType { mime: kind.mime_type(), extension: kind.extension() },
        None => MediaType::OCTET_STREAM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_signatures() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        assert_eq!(classify(&png).as_str(), "image/png");
        assert_eq!(classify(&png).extension(), "png");

        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert_eq!(classify(&jpeg).as_str(), "image/jpeg");

        assert_eq!(classify(b"%PDF-1.5").as_str(), "application/pdf");
    }

    #[test]
    fn unknown_content_falls_back_to_octet_stream() {
        assert_eq!(classify(&[0x00, 0x01, 0x02, 0x03]), MediaType::OCTET_STREAM);
        assert_eq!(classify(&[]), MediaType::OCTET_STREAM);
        assert_eq!(MediaType::OCTET_STREAM.as_str(), "application/octet-stream");
    }

    #[test]
    fn exact_patterns_compare_the_whole_type() {
        let media = classify(b"GIF89a");
        assert_eq!(media.as_str(), "image/gif");
        assert!(media.matches("image/gif"));
        assert!(!media.matches("image/png"));
        assert!(!media.matches("image"));
        assert!(!media.matches(""));
    }

    #[test]
    fn wildcard_patterns_match_the_top_level_type() {
        let media = classify(b"GIF87a");
        assert!(media.matches("image/*"));
        assert!(media.matches("*/*"));
        assert!(!media.matches("video/*"));
        assert!(!media.matches("ima/*"));
    }

    #[test]
    fn pattern_lists_match_in_order() {
        let media = classify(&[0xFF, 0xD8, 0xFF, 0xDB]);
        assert!(media.matches_any(["image/png", "image/jpeg"]));
        assert!(media.matches_any(["video/*", "image/*"]));
        assert!(!media.matches_any(["image/png", "image/gif"]));
        assert!(!media.matches_any(Vec::<String>::new()));
    }
}
