//! Server Module
//!
//! Startup and shared state for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and database pool
//! └── init.rs         - App creation, serving, graceful shutdown
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool opened once, migrations applied
//! 3. **State Creation**: `AppState` built from pool and config
//! 4. **Router Creation**: routes and layers configured
//! 5. **Shutdown**: on signal, stop accepting requests and close the pool

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{ConfigError, ServerConfig};
pub use init::{create_app, run, ServerError};
pub use state::AppState;
