//! models module
pub mod model_definition;

/// Re-export data model types
pub use model_definition::{LyricLine, Line, Mora, MoraCategory, Word, export_lines};
