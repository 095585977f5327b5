//! Model advice integration

pub mod advisor;
pub mod client;
pub mod parser;
pub mod prompts;
