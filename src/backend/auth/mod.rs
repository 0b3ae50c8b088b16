//! Authentication Module
//!
//! User registration, credential checks and bearer token management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - JWT token issuing and validation
//! └── handlers/       - HTTP handlers for /signup and /signin
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username + password → password hashed → user stored
//! 2. **Signin**: username + password → hash verified → JWT returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` checked by
//!    [`crate::backend::middleware::auth`]
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs and expire after a configurable TTL (30 days by default)

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{signin, signup};
pub use password::CredentialHasher;
pub use sessions::{Claims, TokenKeys};
