//! Low-level input layer for the Luar scanner.
//!
//! Source text arrives through a [`Reader`]: a pull function that hands
//! out successive byte chunks until it signals end of input. [`ByteStream`]
//! turns those chunks into a single "current byte" view with one-byte
//! advance, which is all the scanner state machine needs.
//!
//! ```text
//! Reader → chunks → ByteStream → current byte → Scanner
//! ```
//!
//! The byte classification table in [`class`] is shared by the scanner and
//! by anything that needs to decide what counts as an identifier.

pub mod class;
mod reader;
mod stream;

pub use reader::{FnReader, IoReader, Reader, SliceReader, DEFAULT_CHUNK_SIZE};
pub use stream::ByteStream;
