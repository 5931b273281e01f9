use crate::github::RepositoryEdge;

/// Renders the titled repository list: one title line, then one line per
/// repository name in response order.
pub fn format_list(username: &str, edges: &[RepositoryEdge]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Repositories for {username}:\n"));

    for edge in edges {
        out.push_str(&edge.node.name);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Repository;

    fn edge(name: &str) -> RepositoryEdge {
        RepositoryEdge {
            node: Repository {
                name: name.to_string(),
            },
        }
    }

    #[test]
    fn format_list_empty() {
        let out = format_list("octocat", &[]);
        assert_eq!(out, "Repositories for octocat:\n");
    }

    #[test]
    fn format_list_keeps_response_order() {
        let out = format_list("octocat", &[edge("Spoon-Knife"), edge("git-consortium")]);
        assert_eq!(out, "Repositories for octocat:\nSpoon-Knife\ngit-consortium\n");
    }
}
