//! The close capability for readable sources.
//!
//! `std::io` has no close trait; dropping a [`File`] releases its descriptor. Pipelines
//! that hand streams across API boundaries still want an explicit operation whose result
//! they can observe, so the decorators in this crate delegate teardown through [`Close`].
//! Sources that own no releasable resource implement it as a trivial success, which lets
//! [`ClosingSniffReader`](crate::sniff::ClosingSniffReader) wrap either kind uniformly.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Empty, Read};

/// Releases the resource behind a stream.
pub trait Close {
    /// Closes the stream.
    ///
    /// Closing is idempotent for all implementations in this crate; custom sources should
    /// keep it that way.
    ///
    /// # Errors
    /// Returns an error if the underlying resource fails to release cleanly.
    fn close(&mut self) -> io::Result<()>;
}

impl<C: Close + ?Sized> Close for &mut C {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

impl<C: Close + ?Sized> Close for Box<C> {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// The descriptor is released when the `File` drops, so an explicit close has nothing
/// left to report. The impl exists so files satisfy `Read + Close` bounds.
impl Close for File {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T> Close for Cursor<T> {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for &[u8] {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Close for Empty {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Read + Close> Close for BufReader<R> {
    #[inline]
    fn close(&mut self) -> io::Result<()> {
        self.get_mut().close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_sources_close_cleanly() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        assert!(cursor.close().is_ok());

        let mut slice: &[u8] = &[1, 2, 3];
        assert!(slice.close().is_ok());

        let mut empty = io::empty();
        assert!(empty.close().is_ok());
    }

    #[test]
    fn close_forwards_through_wrappers() {
        let mut buffered = BufReader::new(Cursor::new(vec![1u8, 2, 3]));
        assert!(buffered.close().is_ok());

        let mut boxed: Box<Cursor<Vec<u8>>> = Box::new(Cursor::new(vec![1u8]));
        assert!(boxed.close().is_ok());
        assert!((&mut boxed).close().is_ok());
    }
}
