//! Random display names for resources the caller didn't name.

use rand::Rng;
use rand::distributions::Alphanumeric;

/// Length of generated names unless asked otherwise.
pub const DEFAULT_NAME_LENGTH: usize = 7;

/// Generate a name of [`DEFAULT_NAME_LENGTH`] characters.
pub fn generate_name() -> String {
    generate_name_with_length(DEFAULT_NAME_LENGTH)
}

/// Generate `length` characters drawn uniformly from `[A-Za-z0-9]`.
///
/// Draws are independent, so collisions are possible; names are for display
/// only and uniqueness is not guaranteed.
pub fn generate_name_with_length(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
