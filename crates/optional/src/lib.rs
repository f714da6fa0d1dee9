#![no_std]

//! Optional-value containers with an explicit, observable empty state.
//!
//! [`Optional`] is the permissive variant: wrapping an absent payload is
//! legal and collapses to the empty state. [`OptionalStrict`] enforces the
//! same contract but treats an absent payload as caller misuse and rejects
//! it with [`NullPayloadError`]. Both are plain immutable values, safe to
//! copy around and share.

extern crate alloc;

pub mod optional;
pub use optional::Optional;

pub mod strict;
pub use strict::OptionalStrict;

pub mod error;
pub use error::NullPayloadError;
