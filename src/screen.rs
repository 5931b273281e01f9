use std::sync::{Arc, Mutex};

use crate::github::prelude::*;

/// Seam between the display state and the GraphQL layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RepositoryFetcher: Send + Sync {
    /// Fetches the repositories owned by `username`, in server order.
    async fn fetch(&self, username: &str) -> Result<Vec<RepositoryEdge>, FetchError>;
}

pub struct GithubRepositoryFetcher {
    client: Client,
}

impl GithubRepositoryFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl RepositoryFetcher for GithubRepositoryFetcher {
    async fn fetch(&self, username: &str) -> Result<Vec<RepositoryEdge>, FetchError> {
        crate::github::query_user_repositories(&self.client, username).await
    }
}

struct State {
    generation: u64,
    username: Option<String>,
    repositories: Vec<RepositoryEdge>,
}

/// Display state for the repository list: the current username and the edge
/// sequence from the most recently succeeded fetch.
///
/// State is replaced wholesale on success and left untouched on failure. Each
/// accepted username change bumps a generation counter; a completing fetch
/// only applies its result while its generation is still current, so a slow
/// fetch for a superseded username can never overwrite a newer result.
pub struct RepositoryScreen {
    fetcher: Arc<dyn RepositoryFetcher>,
    state: Arc<Mutex<State>>,
}

impl RepositoryScreen {
    pub fn new(fetcher: Arc<dyn RepositoryFetcher>) -> Self {
        Self {
            fetcher,
            state: Arc::new(Mutex::new(State {
                generation: 0,
                username: None,
                repositories: Vec::new(),
            })),
        }
    }

    /// Triggers a fetch for `username`, returning a handle to the spawned
    /// task. Returns `None` without fetching when the value is unchanged.
    pub fn set_username(&self, username: &str) -> Option<tokio::task::JoinHandle<()>> {
        let generation = {
            let mut state = self.state.lock().unwrap();
            if state.username.as_deref() == Some(username) {
                return None;
            }
            state.generation += 1;
            state.username = Some(username.to_string());
            state.generation
        };

        let fetcher = Arc::clone(&self.fetcher);
        let shared = Arc::clone(&self.state);
        let username = username.to_string();
        Some(tokio::spawn(async move {
            let result = fetcher.fetch(&username).await;

            let mut state = shared.lock().unwrap();
            if state.generation != generation {
                log::debug!("discarding stale fetch result for {username}");
                return;
            }
            match result {
                Ok(edges) => state.repositories = edges,
                Err(err) => {
                    log::error!("failed to fetch repositories for {username}: {err}");
                }
            }
        }))
    }

    /// Invalidates any in-flight fetch. Results arriving afterwards are
    /// discarded, so teardown is safe while a request is still pending.
    pub fn teardown(&self) {
        self.state.lock().unwrap().generation += 1;
    }

    pub fn repositories(&self) -> Vec<RepositoryEdge> {
        self.state.lock().unwrap().repositories.clone()
    }

    /// Projects the current state through the formatter. Pure; no fetch.
    pub fn render(&self) -> String {
        let state = self.state.lock().unwrap();
        crate::formatter::format_list(
            state.username.as_deref().unwrap_or(""),
            &state.repositories,
        )
    }
}
