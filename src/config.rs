//! App Configuration
//!
//! Compile-time settings. Nothing here is read from the environment.

use tracing::level_filters::LevelFilter;

/// Remote source of the user directory
pub const USERS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Heading shown above the list and detail views
pub const APP_TITLE: &str = "User Directory";

pub const LOG_LEVEL: LevelFilter = LevelFilter::DEBUG;

/// Lines kept in the in-memory log buffer
pub const LOG_BUFFER_CAPACITY: usize = 200;
