//! slateview-doc: collaborator contracts for the slateview viewport.
//!
//! The viewport renders a document it does not own, against selection and
//! cursor state it does not own. This crate defines those seams as
//! object-safe traits, plus the `Position` value type they all speak, plus
//! small reference implementations suitable for hosts and tests.
//!
//! # Overview
//!
//! - [`Position`]: a 0-indexed (line, column) pair, ordered document-wise
//! - [`DocumentSource`]: live line-count/line-text/line-length queries
//! - [`SelectionStore`]: per-character selection queries and mutation
//! - [`CursorStore`]: cursor position with rightmost-column memory
//! - [`LineDocument`], [`CharSelection`], [`Cursor`]: reference
//!   implementations of the three traits
//!
//! All traits are object-safe: the viewport consumes them as `&dyn` /
//! `&mut dyn` references passed in at each call, and never holds on to a
//! collaborator across calls.

mod cursor;
mod document;
mod selection;
mod types;

pub use cursor::{Cursor, CursorStore};
pub use document::{DocumentSource, LineDocument};
pub use selection::{CharSelection, SelectionStore};
pub use types::Position;
