//! This crate is used as the core library for [Sniffgate](https://crates.io/crates/sniffgate),
//! wrapping byte streams in content-type sniffing decorators.
//!
//! The entry point is [`SniffReader`](sniff::SniffReader), a [`std::io::Read`] decorator that
//! classifies the first chunk a stream produces and either passes the stream through
//! untouched or flags it for rejection when the detected type is outside the caller's
//! allow-list. [`ClosingSniffReader`](sniff::ClosingSniffReader) layers the
//! [`Close`](close::Close) capability on top, for pipelines that release their source
//! explicitly when done.
//!
//! Classification is signature-based and happens at most once per stream, lazily, on the
//! first read that produces data. See [`detect`] for the media-type record and the
//! allow-list pattern matching it supports.

// The close capability and its implementations for common sources
pub mod close;
// Media-type classification and pattern matching
pub mod detect;
// The sniffing decorators themselves
pub mod sniff;

// Prelude, for convenience
pub mod prelude;
