// Dashboard: read and reset a user's performance history, plus summary statistics.

pub mod handlers;
pub mod service;
pub mod summary;
