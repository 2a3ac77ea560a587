//! Profile record and its on-disk store

mod model;
mod store;

pub use model::{Contact, ExperienceEntry, ProfileRecord, ProjectEntry};
pub use store::{LoadOutcome, ProfileError, ProfileStore};
