mod client;
mod graphql;

pub use client::Client;
pub use graphql::{FetchError, Repository, RepositoryEdge};
pub(crate) use graphql::query_user_repositories;

pub(crate) mod prelude {
    pub use super::Client;
    pub use super::{FetchError, RepositoryEdge};
}
