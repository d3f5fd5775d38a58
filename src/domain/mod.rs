//! Request-level logic behind the HTTP endpoints

pub mod deployment;
pub mod pod;
