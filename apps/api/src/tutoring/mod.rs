// Conversational tutoring flows: aptitude practice, soft-skill quizzes, mock interviews.
// Session progression is driven by prompt instructions; this module only
// validates turns, fills defaults, clamps scores and logs finished sessions.

pub mod aptitude;
pub mod handlers;
pub mod interview;
pub mod prompts;
pub mod scoring;
pub mod soft_skill;

/// Longest transcript a client may send with a turn.
pub const MAX_CHAT_HISTORY: usize = 20;
