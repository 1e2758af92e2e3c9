//! assessa-core
//!
//! Pure domain types for functional assessments: patient identification,
//! the response record a wizard fills in, and the submission handed to the
//! presentation layer. No instrument data lives here.

pub mod models;
