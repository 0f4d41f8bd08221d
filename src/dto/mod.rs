//! DTO modules that bridge services with templates.

pub mod consultation;
pub mod dashboard;
pub mod emails;
pub mod main;
