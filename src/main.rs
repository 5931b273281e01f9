mod formatter;
mod github;
mod screen;

use std::sync::Arc;

use crate::github::Client;
use crate::screen::{GithubRepositoryFetcher, RepositoryScreen};
use clap::Parser;

#[derive(clap::Parser, Debug)]
#[command(version, about = "List a GitHub user's repositories")]
struct Cli {
    #[arg(value_name = "USERNAME", help = "GitHub login to look up")]
    username: String,
    #[arg(
        long,
        value_name = "HOST",
        default_value = "github.com",
        help = "Target GitHub hostname",
        env = "GH_HOST"
    )]
    hostname: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let Cli { username, hostname } = Cli::parse();

    let client = Client::new(&hostname)?;
    let screen = RepositoryScreen::new(Arc::new(GithubRepositoryFetcher::new(client)));

    if let Some(done) = screen.set_username(&username) {
        done.await?;
    }
    print!("{}", screen.render());

    Ok(())
}
