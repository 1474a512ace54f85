use super::client::CompletionSource;
use super::reply::{Progress, Reply, accumulate};
use crate::session::SessionState;

/// Runs one conversational turn.
///
/// Records `prompt` in the session, streams a completion over a snapshot of the
/// transcript and commits the reply text (complete, partial or empty) as the
/// assistant's message. Failures come back inside the [`Reply`]; they never
/// escape this function.
pub async fn run_turn<C, F>(
    state: &mut SessionState,
    source: &C,
    prompt: &str,
    on_progress: F,
) -> Reply
where
    C: CompletionSource,
    F: FnMut(Progress<'_>),
{
    let snapshot = state.submit_user_prompt(prompt).messages().to_vec();

    let reply = match source.open_stream(snapshot).await {
        Ok(stream) => accumulate(stream, on_progress).await,
        Err(e) => Reply::interrupted(String::new(), &e),
    };

    if let Some(error) = reply.error() {
        tracing::warn!(
            error,
            partial_len = reply.text().len(),
            "Completion interrupted"
        );
    }

    state.append_assistant_reply(reply.text());
    reply
}
