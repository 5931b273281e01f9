use super::fetch::{graphql, graphql_data};
use super::queries::USER_REPOSITORIES_QUERY;
use super::types::{FetchError, GraphqlResponse, Repository, RepositoryEdge};
use valq::query_value;

/// Fetches the first page (at most 10 entries) of `username`'s repositories,
/// in server order. One request, no pagination.
pub(crate) async fn query_user_repositories(
    client: &crate::github::Client,
    username: &str,
) -> Result<Vec<RepositoryEdge>, FetchError> {
    let payload = serde_json::json!({
        "query": USER_REPOSITORIES_QUERY,
        "variables": { "username": username },
    });

    let resp: GraphqlResponse<serde_json::Value> = graphql(client.octocrab(), &payload).await?;
    let data = graphql_data(resp)?;
    edges_from_data(&data)
}

fn edges_from_data(data: &serde_json::Value) -> Result<Vec<RepositoryEdge>, FetchError> {
    let edges = query_value!(data.user.repositories.edges -> array)
        .ok_or_else(|| FetchError::Shape("response missing user.repositories.edges".to_string()))?;

    let mut out = Vec::with_capacity(edges.len());
    for edge in edges {
        let name = query_value!(edge.node.name -> str)
            .ok_or_else(|| FetchError::Shape("repository edge missing node.name".to_string()))?;
        out.push(RepositoryEdge {
            node: Repository {
                name: name.to_string(),
            },
        });
    }

    Ok(out)
}
