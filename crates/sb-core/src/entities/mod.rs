//! Entity structs mirroring the backend's JSON payloads.
//!
//! Optional and collection fields default when absent so that older or
//! trimmed backend responses still deserialize.

mod importance;
mod note;
mod study;
mod trial;

pub use importance::ParamImportance;
pub use note::Note;
pub use study::{Attribute, SearchSpaceItem, StudyDetail, StudyId, StudySummary};
pub use trial::{IntermediateValue, Trial, TrialParam, settled_prefix_len};
