//! # sb-actions
//!
//! The action layer between a dashboard front end and the backend API.
//!
//! Each action issues one request through a [`sb_client::StudyApi`], merges
//! the result into the shared [`Store`], and reports the outcome through a
//! [`Notifier`]. Graph visibility is additionally persisted through a
//! [`PreferenceStorage`].
//!
//! Network actions swallow failures after notifying and logging them.
//! [`Actions::save_note`] and the preference actions return their failures.

mod actions;
mod error;
mod notify;
mod preferences;
mod store;

pub use actions::{Actions, GRAPH_VISIBILITY_KEY};
pub use error::{ActionError, PreferenceError};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier, Variant};
pub use preferences::{FilePreferenceStorage, MemoryPreferenceStorage, PreferenceStorage};
pub use store::{ParamImportances, Store, StudyDetails};
