// ATS check: scores an uploaded résumé against a pasted job description.
// The band (good/fair/poor) is derived locally from the score.

pub mod checker;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod render;
