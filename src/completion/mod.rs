//! Streaming chat completions against OpenAI-compatible APIs.

mod client;
mod reply;
mod sse_parser;
mod turn;

pub use client::{
    CompletionClient, CompletionSource, DEFAULT_ENDPOINT, DEFAULT_MODEL, TEMPERATURE, TextStream,
};
pub use reply::{Progress, Reply, accumulate};
pub use turn::run_turn;
