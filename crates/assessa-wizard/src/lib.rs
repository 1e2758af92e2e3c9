//! assessa-wizard
//!
//! The step-by-step assessment engine. One generic wizard drives any
//! [`Instrument`](assessa_instruments::Instrument): identification first,
//! one step per category, then review and submission.

pub mod catalog;
pub mod config;
pub mod error;
pub mod navigator;
pub mod session;
