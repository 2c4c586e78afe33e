use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use tracing::info;

use blog_sdk::{Blog, BlogClient, BlogDraft, ErrorKind};
use blog_server::{BlogServer, ServerConfig};
use blog_store::MongoBlogStore;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    match cli.command {
        Command::Serve(args) => cmd_serve(args).await,
        Command::Create(args) => cmd_create(args, format).await,
        Command::Read(args) => cmd_read(args, format).await,
        Command::Update(args) => cmd_update(args, format).await,
        Command::Delete(args) => cmd_delete(args, format).await,
        Command::Demo(args) => cmd_demo(args, format).await,
    }
}

/// Defaults, then the config file, then flags and environment.
fn server_config(args: &ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(uri) = &args.mongo_uri {
        config.store.uri = uri.clone();
    }
    if let Some(database) = &args.database {
        config.store.database = database.clone();
    }
    if let Some(collection) = &args.collection {
        config.store.collection = collection.clone();
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = server_config(&args)?;
    let store = MongoBlogStore::connect(&config.store)
        .await
        .context("cannot connect to MongoDB")?;
    info!(bind = %config.bind_addr, "starting blog service");
    BlogServer::new(config, Arc::new(store)).serve().await?;
    info!("blog service stopped");
    Ok(())
}

fn client(args: &ClientArgs) -> anyhow::Result<BlogClient> {
    Ok(BlogClient::new(&args.server)?)
}

fn print_blog(heading: &str, blog: &Blog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(blog)?),
        OutputFormat::Text => {
            println!("{} {}", "✓".green().bold(), heading);
            println!("  Id: {}", blog.id.yellow());
            println!("  Author: {}", blog.author_id);
            println!("  Title: {}", blog.title.bold());
            println!("  Content: {}", blog.content);
        }
    }
    Ok(())
}

async fn cmd_create(args: CreateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let draft = BlogDraft::new(args.author_id, args.title, args.content);
    let blog = client(&args.client)?.create_blog(draft).await?;
    print_blog("Blog created", &blog, format)
}

async fn cmd_read(args: ReadArgs, format: OutputFormat) -> anyhow::Result<()> {
    let blog = client(&args.client)?.read_blog(&args.id).await?;
    print_blog("Blog found", &blog, format)
}

async fn cmd_update(args: UpdateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let blog = Blog::new(args.id, args.author_id, args.title, args.content);
    let blog = client(&args.client)?.update_blog(blog).await?;
    print_blog("Blog updated", &blog, format)
}

async fn cmd_delete(args: DeleteArgs, format: OutputFormat) -> anyhow::Result<()> {
    let id = client(&args.client)?.delete_blog(&args.id).await?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::json!({ "blog_id": id })),
        OutputFormat::Text => println!("{} Blog {} deleted", "✓".green().bold(), id.yellow()),
    }
    Ok(())
}

async fn cmd_demo(args: ClientArgs, format: OutputFormat) -> anyhow::Result<()> {
    let client = client(&args)?;

    let created = client
        .create_blog(BlogDraft::new(
            "Hennie",
            "My First Blog",
            "The sunshine on my shoulders make me happy!",
        ))
        .await?;
    print_blog("Blog created", &created, format)?;

    let read = client.read_blog(&created.id).await?;
    anyhow::ensure!(read == created, "read back {read} but created {created}");
    print_blog("Blog found", &read, format)?;

    let mut update = created.clone();
    update.title = "Updated".into();
    client.update_blog(update).await?;
    let read = client.read_blog(&created.id).await?;
    anyhow::ensure!(read.title == "Updated", "update not visible: {read}");
    print_blog("Blog updated", &read, format)?;

    client.delete_blog(&created.id).await?;
    match client.read_blog(&created.id).await {
        Err(err) if err.kind() == Some(ErrorKind::NotFound) => {
            println!("{} Blog {} deleted and gone", "✓".green().bold(), created.id.yellow());
            Ok(())
        }
        Err(err) => Err(err.into()),
        Ok(blog) => anyhow::bail!("blog still readable after delete: {blog}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn serve_args(argv: &[&str]) -> ServeArgs {
        let mut full = vec!["blog", "serve"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Command::Serve(args) => args,
            _ => panic!("wrong command"),
        }
    }

    #[test]
    fn config_defaults_without_flags() {
        let config = server_config(&serve_args(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 50051);
        assert_eq!(config.store.collection, "blog");
    }

    #[test]
    fn flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let toml = r#"
bind_addr = "127.0.0.1:7000"

[store]
database = "fromfile"
collection = "posts"
"#;
        write!(file, "{toml}").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = serve_args(&["--config", &path, "--database", "fromflag"]);
        let config = server_config(&args).unwrap();
        assert_eq!(config.bind_addr.port(), 7000);
        assert_eq!(config.store.database, "fromflag");
        assert_eq!(config.store.collection, "posts");
    }

    #[test]
    fn missing_config_file_is_error() {
        assert!(server_config(&serve_args(&["--config", "/nonexistent/blog.toml"])).is_err());
    }

    #[test]
    fn bad_server_url_is_error() {
        let args = ClientArgs { server: "::not a url::".into() };
        assert!(client(&args).is_err());
    }
}
