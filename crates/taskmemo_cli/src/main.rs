//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskmemo_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("taskmemo_core ping={}", taskmemo_core::ping());
    println!("taskmemo_core version={}", taskmemo_core::core_version());
}
