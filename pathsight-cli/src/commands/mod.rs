//! Command implementations for the pathsight CLI.
//!
//! Each command reads a batch of paths, runs one library operation over
//! it, and prints one result per input path in input order.

pub mod completions;
pub mod split;
pub mod tag;
pub mod tokenize;
pub mod transform;
pub mod validate;

pub use completions::CompletionsCommand;
pub use split::SplitCommand;
pub use tag::TagCommand;
pub use tokenize::TokenizeCommand;
pub use transform::TransformCommand;
pub use validate::ValidateCommand;
