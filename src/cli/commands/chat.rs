use anyhow::Result;

use crate::chat::ChatSession;
use crate::cli::ChatArgs;
use crate::config::{ConfigManager, ResolveOptions, SecretsStore, load_api_key, resolve_config};

/// Resolves credentials and configuration, then runs the interactive session.
///
/// The API key is resolved first: without one nothing else happens.
pub async fn run_chat(args: ChatArgs) -> Result<()> {
    let store = SecretsStore::open_default()?;
    let api_key = load_api_key(&store)?;

    let file_config = ConfigManager::new()?.load_or_default()?;
    let options = ResolveOptions {
        language: args.lang,
        endpoint: args.endpoint,
        model: args.model,
    };
    let resolved = resolve_config(&options, &file_config, api_key)?;

    tracing::debug!(
        endpoint = %resolved.endpoint,
        model = %resolved.model,
        language = %resolved.language,
        "Starting chat session"
    );

    let mut session = ChatSession::new(resolved);
    session.run().await
}
