//! Shared types for the coiffeur directory.

mod coiffeur;
mod id;

pub use coiffeur::{CoiffeurRecord, CoiffeurUpdate};
pub use id::CoiffeurId;
