pub mod chat;
pub mod performance;
pub mod user;
