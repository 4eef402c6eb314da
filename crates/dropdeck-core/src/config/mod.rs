//! Unified configuration layer.
//!
//! All environment variable reads are centralized here; business code goes
//! through structured config instead of calling `std::env::var` directly.
//!
//! - `loader`: env_or, env_optional, env_bool helpers and `.env` loading
//! - `schema`: LaunchConfig, ObservabilityConfig
//! - `env_keys`: key constants (including the `PUBLIC_HOST` alias)

pub mod env_keys;
pub mod loader;
pub mod schema;

pub use loader::{env_bool, env_optional, env_or, load_dotenv_from_dir};
pub use schema::{LaunchConfig, ObservabilityConfig};
