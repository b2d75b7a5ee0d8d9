//! mathwiz-core: Answer evaluation and quiz scoring.
//!
//! This crate defines the content data model, the comparison policies used
//! to grade practice problems and quiz questions, and the services that put
//! them together on top of a [`traits::ContentRepository`].

pub mod compare;
pub mod decode;
pub mod error;
pub mod hints;
pub mod model;
pub mod practice;
pub mod scoring;
pub mod traits;

#[cfg(test)]
mod fixtures;

pub use error::{Entity, EvalError};
pub use practice::PracticeService;
pub use scoring::{QuizScorer, Submission};
