//! Feature slices: input box and chat transcript.

pub mod input;
pub mod transcript;
