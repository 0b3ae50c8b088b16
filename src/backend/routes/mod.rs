//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and shared layers
//! ├── auth_routes.rs  - `/`, `/signup`, `/signin`
//! └── blog_routes.rs  - `/blogs` and `/blogs/{id}`
//! ```
//!
//! | Method | Path          | Auth |
//! |--------|---------------|------|
//! | GET    | `/`           | no   |
//! | POST   | `/signup`     | no   |
//! | POST   | `/signin`     | no   |
//! | GET    | `/blogs`      | no   |
//! | POST   | `/blogs`      | yes  |
//! | PUT    | `/blogs/{id}` | yes  |
//! | DELETE | `/blogs/{id}` | yes  |

/// Main router creation
pub mod router;

/// Status and authentication routes
pub mod auth_routes;

/// Blog post routes
pub mod blog_routes;

pub use router::create_router;
