//! Display state derivation and the workers that feed it.
//!
//! - `projector`: tunnel state → endpoint + visibility
//! - `composer`: projection + location + expansion → `DisplayState`
//! - `labels`: injected text formatting
//! - `presenter`: retained state and event handlers
//! - `feed`: NDJSON event feed and its background worker
//! - `scenario`: built-in demo feed

pub mod composer;
pub mod feed;
pub mod labels;
pub mod presenter;
pub mod projector;
pub mod scenario;

pub use presenter::LocationInfo;
