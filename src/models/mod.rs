//! Domain models for wordlookup.
//!
//! # Core Concepts
//!
//! ## Dictionary Payload
//!
//! - [`Entry`]: One dictionary-API result for a word. Only the first entry of a
//!   response is ever rendered.
//! - [`Meaning`]: Definitions grouped under one part of speech.
//! - [`Phonetic`]: A pronunciation, optionally with an audio recording.
//!
//! Every field of the payload is optional on the wire and defaults to empty, so
//! a partially-populated response always deserializes.
//!
//! ## Lookup State
//!
//! - [`LookupOutcome`]: The classified result of one submission.

mod entry;
mod outcome;

pub use entry::*;
pub use outcome::*;
