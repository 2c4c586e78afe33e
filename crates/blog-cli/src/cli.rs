use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub const DEFAULT_SERVER: &str = "http://127.0.0.1:50051";
pub const DEFAULT_READ_ID: &str = "5eb9309c7ade23cccb8c797f";
pub const DEFAULT_DELETE_ID: &str = "5e97033cfd1bae8eadfccf24";

#[derive(Parser)]
#[command(
    name = "blog",
    about = "Blog service: run the server or call its operations",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the blog server
    Serve(ServeArgs),
    /// Create a blog
    Create(CreateArgs),
    /// Read a blog by id
    Read(ReadArgs),
    /// Replace all fields of a blog
    Update(UpdateArgs),
    /// Delete a blog by id
    Delete(DeleteArgs),
    /// Create, read, update, delete and read again
    Demo(ClientArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(long, env = "BLOG_CONFIG")]
    pub config: Option<PathBuf>,
    #[arg(long, env = "BLOG_BIND")]
    pub bind: Option<SocketAddr>,
    #[arg(long, env = "BLOG_MONGO_URI")]
    pub mongo_uri: Option<String>,
    #[arg(long, env = "BLOG_DATABASE")]
    pub database: Option<String>,
    #[arg(long, env = "BLOG_COLLECTION")]
    pub collection: Option<String>,
}

#[derive(Args, Clone)]
pub struct ClientArgs {
    /// Base url of the blog server
    #[arg(long, env = "BLOG_SERVER", default_value = DEFAULT_SERVER)]
    pub server: String,
}

#[derive(Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub client: ClientArgs,
    #[arg(long, default_value = "Hennie")]
    pub author_id: String,
    #[arg(long, default_value = "My First Blog")]
    pub title: String,
    #[arg(long, default_value = "The sunshine on my shoulders make me happy!")]
    pub content: String,
}

#[derive(Args)]
pub struct ReadArgs {
    #[command(flatten)]
    pub client: ClientArgs,
    #[arg(default_value = DEFAULT_READ_ID)]
    pub id: String,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub client: ClientArgs,
    #[arg(default_value = DEFAULT_READ_ID)]
    pub id: String,
    #[arg(long, default_value = "Ronald")]
    pub author_id: String,
    #[arg(long, default_value = "I Updated My Blog")]
    pub title: String,
    #[arg(long, default_value = "This is to test my updated blog")]
    pub content: String,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub client: ClientArgs,
    #[arg(default_value = DEFAULT_DELETE_ID)]
    pub id: String,
}
