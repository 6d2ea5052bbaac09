//! Authentication utilities library
//!
//! Provides the authentication core used by the todo service:
//! - Password hashing (Argon2, configurable cost)
//! - JWT token encoding and validation (HMAC)
//! - Session issuance and the access gate for protected operations
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSettings, Authenticator, HashingParams, SigningAlgorithm};
//! use chrono::Duration;
//!
//! let settings = AuthSettings {
//!     secret: b"secret_key_at_least_32_bytes_long!".to_vec(),
//!     algorithm: SigningAlgorithm::HS256,
//!     access_token_ttl: Duration::minutes(30),
//!     hashing: HashingParams::default(),
//! };
//! let auth = Authenticator::new(&settings).unwrap();
//!
//! // Provisioning: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! auth.verify_credentials("password123", Some(&hash)).unwrap();
//! let token = auth.issue_token("alice", 1, "user").unwrap();
//!
//! // Protected request: validate token
//! let identity = auth.authorize(&token.access_token).unwrap();
//! assert_eq!(identity.subject, "alice");
//! ```

pub mod authenticator;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod session;
pub mod settings;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use gate::AccessGate;
pub use gate::Identity;
pub use jwt::handler::SigningAlgorithm;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashScheme;
pub use password::HashingParams;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::IssuedToken;
pub use session::SessionIssuer;
pub use settings::AuthSettings;
pub use settings::SettingsError;
