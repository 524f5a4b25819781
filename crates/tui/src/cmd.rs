//! # Command Execution Layer
//!
//! Translates application effects ([`Effect`]) into imperative commands
//! ([`Cmd`]) and runs them. This is the boundary where the pure autocomplete
//! state meets the search provider.
//!
//! - [`from_effects`] maps effects to commands.
//! - [`run_cmds`] spawns each command on the Tokio runtime and returns
//!   futures that resolve to the [`Msg`] the runtime feeds back into `App`.
//!
//! Every spawned search resolves to exactly one `Msg::SearchCompleted`, even
//! if the task panics, so the controller's loading state always settles.

use std::sync::Arc;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use moviesearch_api::{SearchProvider, run_search};
use moviesearch_types::{Effect, Msg, SearchOutcome, SearchRequest};
use tokio::task::spawn;
use tracing::warn;

/// Side-effectful commands executed outside of state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Query the provider for titles matching the request text.
    Search(SearchRequest),
}

/// Convert effects into commands.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .map(|effect| match effect {
            Effect::Search(request) => Cmd::Search(request),
        })
        .collect()
}

/// Spawn commands and return futures yielding their completion messages.
pub fn run_cmds(provider: &Arc<dyn SearchProvider>, commands: Vec<Cmd>) -> Vec<BoxFuture<'static, Msg>> {
    commands
        .into_iter()
        .map(|command| match command {
            Cmd::Search(request) => spawn_search(Arc::clone(provider), request),
        })
        .collect()
}

/// Convenience wrapper over [`from_effects`] and [`run_cmds`].
pub fn run_from_effects(provider: &Arc<dyn SearchProvider>, effects: Vec<Effect>) -> Vec<BoxFuture<'static, Msg>> {
    run_cmds(provider, from_effects(effects))
}

fn spawn_search(provider: Arc<dyn SearchProvider>, request: SearchRequest) -> BoxFuture<'static, Msg> {
    let ticket = request.ticket;
    let handle = spawn(async move { run_search(provider.as_ref(), &request).await });
    async move {
        let outcome = handle.await.unwrap_or_else(|error| {
            warn!(ticket = ticket.0, %error, "search task failed");
            SearchOutcome::failed(format!("Search task failed: {error}"))
        });
        Msg::SearchCompleted { ticket, outcome }
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use moviesearch_api::CatalogProvider;
    use moviesearch_types::RequestTicket;

    #[tokio::test]
    async fn search_effect_resolves_to_completion_message() {
        let provider: Arc<dyn SearchProvider> = Arc::new(CatalogProvider::new(["Batman", "Alien"]));
        let request = SearchRequest {
            ticket: RequestTicket(7),
            query: "BAT".into(),
        };

        let mut pending = run_from_effects(&provider, vec![Effect::Search(request)]);
        assert_eq!(pending.len(), 1);

        match pending.remove(0).await {
            Msg::SearchCompleted { ticket, outcome } => {
                assert_eq!(ticket, RequestTicket(7));
                assert_eq!(outcome, SearchOutcome::ok(vec!["Batman".into()]));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
