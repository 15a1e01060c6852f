//! Domain types and rules for the wedding site.
//!
//! Nothing in this crate performs I/O: RSVP validation, the wedding
//! configuration document, and countdown arithmetic are all pure so the
//! storage and HTTP layers can share them.

pub mod countdown;
pub mod error;
pub mod rsvp;
pub mod types;
pub mod wedding;
