use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::catalog::{Category, FetchStrategy};
use crate::config::{ServerConfig, DEFAULT_BIND};

#[derive(Parser, Debug)]
#[command(name = "frontier-armory")]
#[command(version, about = "Weapons of the Frontier catalog server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the catalog over HTTP
    Serve(ServeArgs),

    /// Create an empty weapons database
    Init {
        /// Output SQLite database path
        output_db: PathBuf,
    },

    /// Create a database and load every <table>.jsonl seed file into it
    Import {
        /// Directory containing JSONL files
        input_dir: PathBuf,

        /// Output SQLite database path
        output_db: PathBuf,
    },

    /// List all table names in dependency order
    ListTables,

    /// Print the weapon images found in a category folder
    ListCategory {
        category: Category,

        /// Root holding images/<category>/ folders
        #[arg(long, env = "FRONTIER_STATIC_ROOT", default_value = "static")]
        static_root: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// SQLite database path (defaults to the platform data directory)
    #[arg(long, env = "FRONTIER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Root holding images/<category>/ folders
    #[arg(long, env = "FRONTIER_STATIC_ROOT", default_value = "static")]
    pub static_root: PathBuf,

    /// Address to listen on
    #[arg(long, env = "FRONTIER_BIND", default_value_t = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// How child rows of a weapon are fetched
    #[arg(long, env = "FRONTIER_FETCH_STRATEGY", value_enum, default_value_t = FetchStrategy::Batched)]
    pub fetch_strategy: FetchStrategy,

    /// Emit logs as JSON lines
    #[arg(long, env = "FRONTIER_LOG_JSON")]
    pub log_json: bool,
}

impl ServeArgs {
    pub fn into_config(self, database: PathBuf) -> ServerConfig {
        ServerConfig {
            bind: self.bind,
            fetch_strategy: self.fetch_strategy,
            log_json: self.log_json,
            ..ServerConfig::new(database, self.static_root)
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
