// ATS scoring engine: text flattening, keyword extraction, section detection,
// sub-scorers, the weighted analyzer and the recommendation generator.
// Everything below `handlers` is pure and synchronous; no I/O, no shared state.

pub mod analyzer;
pub mod flatten;
pub mod handlers;
pub mod keywords;
pub mod recommendations;
pub mod scorers;
pub mod sections;
pub mod vocabulary;
