//! Server-Sent Events (SSE) parser for OpenAI-compatible streaming responses.
//!
//! Turns the raw byte stream of a chat completion response into text fragments.

use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

/// One `data:` payload of a streaming chat completion.
#[derive(Debug, Deserialize)]
struct StreamResponse {
    #[serde(default)]
    choices: Vec<StreamChoice>,
    #[serde(default)]
    error: Option<StreamError>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StreamError {
    message: String,
}

/// What a single SSE line means for the text stream.
#[derive(Debug, PartialEq, Eq)]
enum SseEvent {
    Content(String),
    Error(String),
    Done,
    Skip,
}

/// Converts a raw SSE byte stream into a stream of text fragments.
///
/// The stream ends at `data: [DONE]`, at the end of the body, or right after
/// yielding the first error.
pub fn sse_to_text_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer: Vec<u8> = Vec::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {e}"));
                    return;
                }
            };

            // Decode whole lines only; a chunk may end inside a multi-byte character.
            buffer.extend_from_slice(&chunk);

            while let Some(line_end) = buffer.iter().position(|&b| b == b'\n') {
                let line: Vec<u8> = buffer.drain(..=line_end).collect();
                let line = String::from_utf8_lossy(&line);

                match parse_sse_line(line.trim()) {
                    SseEvent::Content(content) => yield Ok(content),
                    SseEvent::Error(message) => {
                        yield Err(anyhow::anyhow!("API stream error: {message}"));
                        return;
                    }
                    SseEvent::Done => return,
                    SseEvent::Skip => {}
                }
            }
        }

        // A final event without a trailing newline.
        let rest = String::from_utf8_lossy(&buffer);
        if let SseEvent::Content(content) = parse_sse_line(rest.trim()) {
            yield Ok(content);
        }
    }
}

/// Parses a single trimmed SSE line.
///
/// Non-data lines, comments, unparsable JSON and empty deltas are skipped.
fn parse_sse_line(line: &str) -> SseEvent {
    let Some(payload) = line.strip_prefix("data:") else {
        return SseEvent::Skip;
    };
    let payload = payload.trim_start();

    if payload == "[DONE]" {
        return SseEvent::Done;
    }

    let Ok(response) = serde_json::from_str::<StreamResponse>(payload) else {
        return SseEvent::Skip;
    };

    if let Some(error) = response.error {
        return SseEvent::Error(error.message);
    }

    let content: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if content.is_empty() {
        SseEvent::Skip
    } else {
        SseEvent::Content(content)
    }
}
