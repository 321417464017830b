//! Convenient re-exports of commonly used types, designed to make crate usage painless.
//!
//! The contents of this module can be used by including the following in any module:
//! ```
//! use sniffgate_core::prelude::*;
//! ```

#[doc(inline)]
pub use crate::close::Close;
#[doc(inline)]
pub use crate::detect::{classify, MediaType};
#[doc(inline)]
pub use crate::sniff::{ClosingSniffReader, SniffReader};

/// Includes [`sniff::Error`], which is carried by the rejection I/O errors raised from
/// [`SniffReader`] and [`ClosingSniffReader`].
pub mod sniff {
    #[doc(inline)]
    pub use crate::sniff::Error;
}
