//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`signin`** - POST /signin - Exchange credentials for a bearer token
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── signin.rs   - User authentication handler
//! ```

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::{Credentials, MessageResponse, SigninRequest, SignupRequest, TokenResponse};

pub use signin::signin;
pub use signup::signup;
