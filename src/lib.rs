pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod parser;
pub mod schema;
pub mod server;
pub mod writer;

pub use catalog::{Category, FetchStrategy, WeaponDetail, WeaponStore};
pub use cli::{Cli, Commands};
pub use error::AppError;
pub use server::{build_router, AppState};
