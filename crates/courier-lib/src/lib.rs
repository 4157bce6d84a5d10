// courier-lib: JSON response writing for HTTP handlers

pub mod errors;
pub mod json;
pub mod logger;
pub mod web;
