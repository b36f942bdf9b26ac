//! Markdown manual parsing: raw text to a structured [`Manual`].

pub mod parser;
pub mod types;

pub use parser::parse;
pub use types::{Manual, Task, Team};
