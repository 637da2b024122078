// Job application auto-fill: resume data extraction, form answer generation,
// and application tracking endpoints.

pub mod extract;
pub mod generate;
pub mod handlers;
