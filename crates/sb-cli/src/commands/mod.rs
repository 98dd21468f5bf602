pub mod dispatch;
pub mod graphs;
pub mod importances;
pub mod note;
pub mod shared;
pub mod studies;
pub mod study;
