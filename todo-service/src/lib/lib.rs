pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

// Re-export commonly used types
pub use domain::todo;
pub use domain::user;
pub use outbound::repositories;
