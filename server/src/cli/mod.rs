use clap::{Parser, Subcommand};

pub mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML config file (defaults to ./config.yaml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub serve_args: ServeArgs,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct ServeArgs {
    /// Interface the portfolio API binds to, overriding `http.host`
    #[arg(long, value_name = "ADDRESS")]
    pub host: Option<String>,

    /// Port for the portfolio API, overriding `http.port`
    #[arg(long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Comma-separated origins allowed to call the API from a browser, or "*"
    #[arg(long, value_name = "ORIGINS")]
    pub cors_origins: Option<String>,

    /// Catalog file to serve instead of the built-in projects (.json, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<String>,
}

#[derive(Debug, Clone, Parser, Default)]
pub struct ListArgs {
    /// Search text matched against title, brand, summary and tags
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Comma-separated sectors (e.g., "Website Design,branding")
    #[arg(long, value_name = "SECTORS")]
    pub sectors: Option<String>,

    /// Comma-separated services (e.g., SEO,Video)
    #[arg(long, value_name = "SERVICES")]
    pub services: Option<String>,

    /// "all" or a single year
    #[arg(long, default_value = "all")]
    pub year: String,

    /// newest, oldest, brand-az or brand-za
    #[arg(long, default_value = "newest")]
    pub sort: String,

    /// Catalog file to list instead of the built-in projects
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the API server (default if no command specified)
    Serve(ServeArgs),
    /// List catalog projects, optionally filtered and sorted
    List(ListArgs),
    /// Print the distinct project years, newest first
    Years {
        /// Catalog file to read instead of the built-in projects
        #[arg(long, value_name = "FILE")]
        catalog: Option<String>,
    },
}
