mod fetch;
mod queries;
mod repositories;
mod types;

pub use types::{FetchError, Repository, RepositoryEdge};

pub(crate) use repositories::query_user_repositories;
