//! assessa-export
//!
//! Report rendering for finished assessments. A submission is turned into
//! Markdown through a Tera template; the default template mirrors the
//! review screen.

pub mod error;
pub mod render;
