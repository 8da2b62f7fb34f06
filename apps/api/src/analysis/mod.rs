// ATS analysis core: PDF text extraction, job-description normalization, and
// prompt composition. Deterministic and synchronous; the model call itself
// lives behind crate::agent.

pub mod compose;
pub mod extract;
pub mod handlers;
pub mod normalize;
