//! Core data structures.

mod serie;

pub use serie::{Serie, SerieBuilder, SerieIndex};
