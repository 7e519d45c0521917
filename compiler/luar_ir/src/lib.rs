//! Luar IR - shared front-end vocabulary
//!
//! This crate holds the data types every other Luar crate agrees on:
//! - Names for interned byte strings
//! - Tokens produced by the scanner
//! - Symbol mangling for operator definitions
//! - Scratch stacks handed to the bytecode generator
//!
//! Floats are stored as `u64` bits and strings as interned `Name`s so that
//! tokens stay `Copy + Eq + Hash`.

mod interner;
pub mod mangle;
mod name;
mod scratch;
mod token;

pub use interner::{InternError, StringInterner};
pub use mangle::MangleKind;
pub use name::Name;
pub use scratch::{BcInsLine, CompileScratch, VarFlags, VarInfo};
pub use token::{NumberLit, Substitution, Token, TokenKind, ValueRef};
