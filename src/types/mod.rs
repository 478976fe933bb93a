//! Core domain types for mx.
//!
//! This module contains the parsed representations of markup constructs.
//! Constructs are data-only: rendering lives in [`crate::render`], and the
//! scanning that produces them lives in [`crate::matcher`].

mod construct;

pub use construct::Construct;
