// Interview coach: multi-turn chat with a localized system instruction.

pub mod handlers;
pub mod prompts;
pub mod session;
