// Single-shot review flows: resume feedback and code analysis.
// No session state and nothing is persisted.

pub mod code_runner;
pub mod handlers;
pub mod prompts;
pub mod resume;
