// Résumé builder: structured extraction from an uploaded file and a printable
// A4 rendering of the result.

pub mod extractor;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod render;
