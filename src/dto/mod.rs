//! DTO modules that bridge services with templates.

pub mod catalog;
pub mod products;
