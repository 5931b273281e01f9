use super::types::{FetchError, GraphqlResponse};

pub(super) async fn graphql<T>(
    client: &octocrab::Octocrab,
    payload: &serde_json::Value,
) -> Result<T, FetchError>
where
    T: serde::de::DeserializeOwned,
{
    client.graphql::<T>(payload).await.map_err(fetch_error_from)
}

fn fetch_error_from(err: octocrab::Error) -> FetchError {
    match &err {
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 401 => {
            FetchError::Auth(source.message.clone())
        }
        _ => FetchError::Transport(err.to_string()),
    }
}

pub(super) fn graphql_data<T>(resp: GraphqlResponse<T>) -> Result<T, FetchError> {
    if let Some(errors) = resp.errors {
        let auth_rejected = errors.iter().any(|e| {
            matches!(
                e.error_type.as_deref(),
                Some("FORBIDDEN") | Some("INSUFFICIENT_SCOPES")
            )
        });
        let msg = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        if auth_rejected {
            return Err(FetchError::Auth(msg));
        }
        return Err(FetchError::Shape(format!("GraphQL returned errors: {msg}")));
    }
    resp.data
        .ok_or_else(|| FetchError::Shape("GraphQL response missing data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::graphql::types::GraphqlError;

    fn error(message: &str, error_type: Option<&str>) -> GraphqlError {
        GraphqlError {
            message: message.to_string(),
            error_type: error_type.map(str::to_string),
        }
    }

    #[test]
    fn graphql_data_returns_payload() {
        let resp = GraphqlResponse {
            data: Some(42),
            errors: None,
        };
        assert_eq!(graphql_data(resp).unwrap(), 42);
    }

    #[test]
    fn graphql_data_missing_data_is_shape_error() {
        let resp: GraphqlResponse<i32> = GraphqlResponse {
            data: None,
            errors: None,
        };
        assert!(matches!(
            graphql_data(resp).unwrap_err(),
            FetchError::Shape(_)
        ));
    }

    #[test]
    fn graphql_data_scope_error_is_auth_error() {
        let resp: GraphqlResponse<i32> = GraphqlResponse {
            data: None,
            errors: Some(vec![error("token lacks scopes", Some("INSUFFICIENT_SCOPES"))]),
        };
        assert!(matches!(
            graphql_data(resp).unwrap_err(),
            FetchError::Auth(_)
        ));
    }

    #[test]
    fn graphql_data_not_found_is_shape_error() {
        let resp: GraphqlResponse<i32> = GraphqlResponse {
            data: None,
            errors: Some(vec![error(
                "Could not resolve to a User with the login of 'ghost-user'.",
                Some("NOT_FOUND"),
            )]),
        };
        let err = graphql_data(resp).unwrap_err();
        assert!(matches!(err, FetchError::Shape(_)));
        assert!(err.to_string().contains("ghost-user"));
    }
}
