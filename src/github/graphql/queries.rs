pub(crate) const USER_REPOSITORIES_QUERY: &str =
    include_str!("queries/user_repositories.graphql");
