//! Terrane History - Document model for geological history files
//!
//! History files are line-oriented text documents describing an ordered
//! sequence of geological events (stratigraphy, faults, folds, tilts,
//! unconformities, intrusions) followed by a settings footer. This crate
//! parses them into typed, mutable event records while preserving exact
//! byte reconstruction of everything it does not interpret, and serializes
//! them back into documents the simulation tool consumes unmodified:
//! - Anchor scanner over the raw line sequence
//! - Event codec between raw spans and typed records
//! - The [`Document`] aggregate with query/mutation operations
//! - Pinpoint field edits inside the verbatim footer
//! - Template-driven event construction and bulk fault-set generation

pub mod build;
pub mod bulk;
pub mod codec;
pub mod document;
pub mod event;
pub mod footer;
mod scan;
mod template;

pub use build::{ParamValue, Params, Position, ZPlacement};
pub use bulk::{BulkOptions, JoinType, StratSpec};
pub use codec::DecodeMode;
pub use document::{Document, DrillholeOptions, ParamKey, ParamUpdates, ParseOptions};
pub use event::{Event, Layer, Properties};
pub use footer::{CubeKind, Footer};
