//! A tiny interactive loop for three joke "toy languages".
//!
//! Every language understands the same four commands (`print`, `if`, `loop`
//! and `try`) and answers with a decorated string. Nothing is computed and
//! nothing is stored: each language is a single string-pattern dispatcher.
//!
//! The main entry point is [`Interpreter`], which routes a line to the
//! dispatcher registered for its language tag. The public modules
//! [`command`], [`condition`] and [`language`] expose the dispatcher trait,
//! the condition whitelist and the built-in languages.

pub mod command;
pub mod condition;
pub mod config;
mod interpreter;
pub mod language;
mod lexer;
mod parser;
mod texts;

/// Just a convenient re-export of the interactive loop.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::{Flow, Interpreter};
