//! Stream decorators that classify and gate content by media type.
//!
//! [`SniffReader`] wraps any [`Read`] implementation together with an allow-list of
//! media-type patterns. The first call to [`read`](Read::read) that produces data runs
//! signature classification on exactly the bytes delivered by that call, stores the
//! result for the lifetime of the reader, and checks it against the allow-list. A stream
//! whose detected type matches keeps streaming untouched; one that does not still
//! delivers the classifying chunk, then fails the following read with
//! [`Error::NotAllowed`].
//!
//! [`ClosingSniffReader`] is the same decorator for pipelines that also release the
//! wrapped source when done, via the [`Close`] capability.

use std::io::{self, Read};

use snafu::prelude::*;

use crate::close::Close;
use crate::detect::{classify, MediaType};

/// Error conditions raised by the sniffing decorators.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// Thrown when the detected media type matches no allow-list pattern.
    #[snafu(display("Media type {media_type} is not allowed!"))]
    NotAllowed { media_type: String },
}

impl Error {
    /// Recovers the rejection carried inside an [`io::Error`], if there is one.
    ///
    /// [`SniffReader`] surfaces rejection through the [`Read`] contract as an
    /// [`io::Error`] of kind [`InvalidData`](io::ErrorKind::InvalidData) wrapping this
    /// type. Use this to branch on rejection separately from transport failures:
    ///
    /// ```
    /// # use std::io::Read;
    /// # use sniffgate_core::prelude::*;
    /// let mut reader = SniffReader::new(&b"GIF89a trailer"[..], ["image/png"]);
    /// let mut sink = Vec::new();
    /// let error = reader.read_to_end(&mut sink).unwrap_err();
    /// assert!(sniff::Error::from_io(&error).is_some());
    /// ```
    #[must_use]
    pub fn from_io(error: &io::Error) -> Option<&Error> {
        error.get_ref().and_then(|source| source.downcast_ref::<Error>())
    }
}

impl From<Error> for io::Error {
    fn from(error: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, error)
    }
}

/// A [`Read`] decorator that classifies the first chunk of a stream and rejects media
/// types outside its allow-list.
///
/// Classification happens at most once per reader, lazily, on the first read that
/// produces at least one byte; a stream that never produces data is never classified and
/// never rejected. Afterwards every read is a pure passthrough to the wrapped reader.
///
/// A rejected stream still delivers the classifying chunk to the caller; the rejection
/// error is returned by the *next* read, before any further data is pulled from the
/// wrapped reader. Draining past the rejection is allowed and loses no bytes.
///
/// Reads take `&mut self`, so sharing a `SniffReader` across threads requires external
/// synchronization such as a `Mutex`.
///
/// # Example
/// ```
/// use std::io::Read;
///
/// use sniffgate_core::prelude::*;
///
/// let png: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
/// let mut reader = SniffReader::new(png, ["image/*"]);
///
/// let mut contents = Vec::new();
/// reader.read_to_end(&mut contents)?;
/// assert_eq!(contents.len(), png.len());
/// assert_eq!(reader.media_type().unwrap().as_str(), "image/png");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct SniffReader<R: Read> {
    inner: R,
    allowed: Vec<String>,
    media: Option<MediaType>,
    rejection: Option<io::Error>,
}

impl<R: Read> SniffReader<R> {
    /// Creates a new `SniffReader` over `inner`, accepting only streams whose detected
    /// media type matches one of the `allowed` patterns.
    ///
    /// Patterns are exact media types (`"image/png"`) or top-level wildcards
    /// (`"image/*"`); see [`MediaType::matches`]. Order is preserved and the first match
    /// wins. No detection occurs until the stream produces data.
    ///
    /// # Panics
    /// Panics if `allowed` contains no patterns.
    pub fn new<I, S>(inner: R, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        assert!(!allowed.is_empty(), "allow-list needs at least one pattern");
        Self { inner, allowed, media: None, rejection: None }
    }

    /// Returns the media type detected on the first non-empty read, or `None` if the
    /// stream has not produced data yet. Once set, the value never changes.
    #[inline]
    #[must_use]
    pub fn media_type(&self) -> Option<MediaType> {
        self.media
    }

    /// Returns the allow-list this reader was constructed with.
    #[inline]
    pub fn allowed(&self) -> &[String] {
        &self.allowed
    }

    /// Gets a reference to the wrapped reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Gets a mutable reference to the wrapped reader.
    ///
    /// Reading from it directly bypasses classification.
    #[inline]
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Consumes the `SniffReader` and returns the wrapped reader.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for SniffReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(rejection) = self.rejection.take() {
            return Err(rejection);
        }

        let count = self.inner.read(buf)?;
        if self.media.is_some() || count == 0 {
            // Already classified, or nothing to classify: an empty read is EOF or a
            // zero-length chunk, and either way detection stays deferred.
            return Ok(count);
        }

        // Classification runs on exactly the bytes this call delivered, exactly once.
        let media = classify(&buf[..count]);
        log::debug!("Classified stream as {media}");
        self.media = Some(media);

        if !media.matches_any(&self.allowed) {
            let error = Error::NotAllowed { media_type: media.to_string() };
            log::error!("{error}");
            // The chunk still belongs to the caller; the rejection is delivered on the
            // next read instead of discarding data.
            self.rejection = Some(error.into());
        }
        Ok(count)
    }
}

/// A [`SniffReader`] that also releases the wrapped source.
///
/// `read` delegates entirely to the embedded [`SniffReader`], and
/// [`close`](Close::close) delegates to the wrapped reader's [`Close`] implementation.
/// Sources without a releasable resource close as a trivial success, so the decorator can
/// stand in anywhere a closable readable stream is required.
pub struct ClosingSniffReader<R: Read + Close> {
    inner: SniffReader<R>,
}

impl<R: Read + Close> ClosingSniffReader<R> {
    /// Creates a new `ClosingSniffReader`; see [`SniffReader::new`].
    ///
    /// # Panics
    /// Panics if `allowed` contains no patterns.
    pub fn new<I, S>(inner: R, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { inner: SniffReader::new(inner, allowed) }
    }

    /// Returns the media type detected on the first non-empty read, or `None` if the
    /// stream has not produced data yet.
    #[inline]
    #[must_use]
    pub fn media_type(&self) -> Option<MediaType> {
        self.inner.media_type()
    }

    /// Gets a reference to the wrapped reader.
    #[inline]
    pub fn get_ref(&self) -> &R {
        self.inner.get_ref()
    }

    /// Consumes the `ClosingSniffReader` and returns the wrapped reader.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }
}

impl<R: Read + Close> Read for ClosingSniffReader<R> {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read + Close> Close for ClosingSniffReader<R> {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        self.inner.get_mut().close()
    }
}
