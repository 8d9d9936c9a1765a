//! Name command handler (offline).

use mcpbridge_core::generate_name_with_length;

/// Execute the name command: print a fresh random name.
pub fn execute(length: u8) {
    println!("{}", generate_name_with_length(usize::from(length)));
}
