// Career path: suggested roles plus interview-prep items for one résumé.

pub mod analyzer;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod render;
