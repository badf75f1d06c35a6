use anyhow::Error;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use viewclone::cloner::Cloner;
use viewclone::remote::{Credentials, HttpRemoteClient};
use viewclone::substitution::SubstitutionTable;
use viewclone::urls;

/// Clone a view and the jobs it references, renaming every clone.
#[derive(Parser)]
#[command(name = "viewclone", version)]
struct Args {
    /// Absolute url of the view to clone, e.g. http://host/view/trunk
    #[arg(long)]
    url: String,

    /// Name of the view to create next to the source view
    #[arg(long)]
    new_name: String,

    /// Comma-separated old=new rename pairs, applied in the given order
    #[arg(long)]
    pattern: String,

    /// Username for basic auth against the server
    #[arg(long)]
    username: String,

    /// Password for basic auth against the server
    #[arg(long)]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let table = SubstitutionTable::parse(&args.pattern)?;

    let source_view_url = urls::strip_end_slash(&args.url);
    let root_url = urls::server_root(source_view_url)?;
    let credentials = Credentials {
        username: args.username,
        password: args.password,
    };
    let client = HttpRemoteClient::new(root_url, credentials);

    let report = Cloner::new(&client)
        .clone_view(source_view_url, &args.new_name, &table)
        .await?;

    info!(
        "clone finished: {} job(s) created, {} already existed",
        report.created_jobs.len(),
        report.existing_jobs.len()
    );
    Ok(())
}
