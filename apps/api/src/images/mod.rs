// Image studio: text-to-image generation at a chosen resolution.

pub mod generator;
pub mod handlers;
pub mod models;
