pub mod identification;
pub mod response;
pub mod submission;
