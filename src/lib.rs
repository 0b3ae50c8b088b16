//! Blog Backend - Main Library
//!
//! A small REST backend: username/password signup and signin with bcrypt
//! hashing and JWT bearer tokens, plus create/list/update/delete for blog
//! posts. Writes require a valid token; reads are public.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types (posts, payloads) and validation errors
//! - **`backend`** - Axum server, SQLite persistence, auth, handlers
//!
//! # Usage
//!
//! ```rust,no_run
//! use blog_backend::backend::server::{run, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! run(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # HTTP API
//!
//! | Method | Path          | Auth | Body                     | Response       |
//! |--------|---------------|------|--------------------------|----------------|
//! | GET    | `/`           | no   | –                        | status text    |
//! | POST   | `/signup`     | no   | `{username, password}`   | `{msg}`        |
//! | POST   | `/signin`     | no   | `{username, password}`   | `{token}`      |
//! | GET    | `/blogs`      | no   | –                        | `[Post]`       |
//! | POST   | `/blogs`      | yes  | `{title, description}`   | `Post`         |
//! | PUT    | `/blogs/{id}` | yes  | partial `Post`           | `Post`         |
//! | DELETE | `/blogs/{id}` | yes  | –                        | `{msg}`        |

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
