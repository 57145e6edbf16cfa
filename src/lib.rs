//! A symmetric one-to-one hashmap, where either term of a pair looks up the other

#![deny(unused_imports, missing_debug_implementations, unreachable_pub)]
#![cfg_attr(doc, deny(missing_docs, rustdoc::broken_intra_doc_links))]
#![warn(rust_2018_idioms)]

/// The main data struct
pub mod gloss;
pub use crate::gloss::*;

/// The record of pairs evicted by an insert
pub mod displaced;
pub use crate::displaced::*;

/// Terms of mixed types
pub mod term;
pub use crate::term::*;

/// Building maps out of dynamic values
pub mod source;
pub use crate::source::*;

/// The crate's error type
pub mod error;
pub use crate::error::*;

#[cfg(feature = "serde")]
mod serde_impl;
