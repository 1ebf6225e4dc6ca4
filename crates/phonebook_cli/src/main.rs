//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `phonebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("phonebook_core ping={}", phonebook_core::ping());
    println!("phonebook_core version={}", phonebook_core::core_version());
}
