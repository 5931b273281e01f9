use anyhow::Context;

/// Shared GraphQL client. Built once at startup and passed by reference; the
/// underlying `octocrab` instance carries the endpoint, the bearer token, and
/// the transport's default response caching.
pub struct Client {
    octocrab: octocrab::Octocrab,
}

impl Client {
    pub fn new(host: &str) -> anyhow::Result<Self> {
        let token = token_from_env(host)?;
        let octocrab = build_github_client(host, token)?;
        Ok(Self { octocrab })
    }

    pub(crate) fn octocrab(&self) -> &octocrab::Octocrab {
        &self.octocrab
    }
}

fn build_github_client(host: &str, token: String) -> anyhow::Result<octocrab::Octocrab> {
    let client = octocrab::Octocrab::builder()
        .base_uri(api_base_url(host))
        .context("failed to set base URI")?
        .personal_token(token)
        .build()?;
    Ok(client)
}

fn api_base_url(host: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        "https://api.github.com".to_string()
    } else {
        format!("https://{host}/api")
    }
}

fn token_from_env(host: &str) -> anyhow::Result<String> {
    let keys = if host.eq_ignore_ascii_case("github.com") {
        ["GH_TOKEN", "GITHUB_TOKEN"]
    } else {
        ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    };

    for key in keys {
        if let Ok(token) = std::env::var(key) {
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
    }

    anyhow::bail!("token for {host} not found. Please set `{}`.", keys[0]);
}
