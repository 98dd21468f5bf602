//! # sb-core
//!
//! Core types shared across all Studyboard crates:
//! - Study summaries and details as served by the study-tracking backend
//! - Trials, trial states, and the settled-trial rule used for incremental refresh
//! - Study notes with their server-tracked version
//! - Graph visibility preferences
//! - Parameter importances
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod visibility;

pub use entities::{
    Attribute, IntermediateValue, Note, ParamImportance, SearchSpaceItem, StudyDetail, StudyId,
    StudySummary, Trial, TrialParam, settled_prefix_len,
};
pub use enums::{StudyDirection, TrialState};
pub use errors::CoreError;
pub use visibility::{GraphVisibility, VisibilityAssignment};
