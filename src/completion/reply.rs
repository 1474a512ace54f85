use anyhow::Result;
use futures_util::{Stream, StreamExt};

/// How a streaming completion ended.
///
/// Either way there is text to commit; an interrupted reply carries whatever
/// arrived before the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Complete(String),
    Interrupted { partial: String, error: String },
}

impl Reply {
    pub fn interrupted(partial: String, error: &anyhow::Error) -> Self {
        Self::Interrupted {
            partial,
            // `{:#}` keeps the context chain on one line.
            error: format!("{error:#}"),
        }
    }

    /// The text to commit to the transcript.
    pub fn text(&self) -> &str {
        match self {
            Self::Complete(text) | Self::Interrupted { partial: text, .. } => text,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Complete(_) => None,
            Self::Interrupted { error, .. } => Some(error),
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

/// Progress of a reply while it streams in.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// The fragment that just arrived.
    pub fragment: &'a str,
    /// Everything received so far, `fragment` included.
    pub text: &'a str,
}

/// Folds a fragment stream into one reply, reporting each step to `on_progress`.
///
/// Fragments are concatenated in order with nothing in between. The fold stops
/// at the first error and keeps what it had.
pub async fn accumulate<S, F>(stream: S, mut on_progress: F) -> Reply
where
    S: Stream<Item = Result<String>>,
    F: FnMut(Progress<'_>),
{
    let mut stream = std::pin::pin!(stream);
    let mut text = String::new();

    while let Some(item) = stream.next().await {
        match item {
            Ok(fragment) => {
                text.push_str(&fragment);
                on_progress(Progress {
                    fragment: &fragment,
                    text: &text,
                });
            }
            Err(e) => return Reply::interrupted(text, &e),
        }
    }

    Reply::Complete(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::stream;

    fn fragments(items: Vec<Result<&str>>) -> impl Stream<Item = Result<String>> {
        stream::iter(items.into_iter().map(|r| r.map(str::to_string)))
    }

    #[tokio::test]
    async fn test_accumulate_concatenates_in_order() {
        let reply = accumulate(
            fragments(vec![Ok("Hel"), Ok("lo "), Ok("world")]),
            |_| {},
        )
        .await;
        assert_eq!(reply, Reply::Complete("Hello world".to_string()));
        assert!(reply.error().is_none());
    }

    #[tokio::test]
    async fn test_accumulate_reports_each_step() {
        let mut seen = Vec::new();
        accumulate(fragments(vec![Ok("a"), Ok("b"), Ok("c")]), |p| {
            seen.push((p.fragment.to_string(), p.text.to_string()));
        })
        .await;

        assert_eq!(
            seen,
            vec![
                ("a".to_string(), "a".to_string()),
                ("b".to_string(), "ab".to_string()),
                ("c".to_string(), "abc".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_accumulate_keeps_partial_on_error() {
        let reply = accumulate(
            fragments(vec![
                Ok("Par"),
                Ok("tial"),
                Err(anyhow::anyhow!("connection reset")),
                Ok("ignored"),
            ]),
            |_| {},
        )
        .await;

        assert_eq!(reply.text(), "Partial");
        assert!(!reply.is_complete());
        assert!(reply.error().is_some_and(|e| e.contains("connection reset")));
    }

    #[tokio::test]
    async fn test_accumulate_empty_stream() {
        let reply = accumulate(fragments(vec![]), |_| {}).await;
        assert_eq!(reply, Reply::Complete(String::new()));
    }

    #[test]
    fn test_interrupted_keeps_context_chain() {
        let err = anyhow::anyhow!("status 401").context("Failed to connect");
        let reply = Reply::interrupted(String::new(), &err);
        assert_eq!(reply.error(), Some("Failed to connect: status 401"));
        assert_eq!(reply.text(), "");
    }
}
