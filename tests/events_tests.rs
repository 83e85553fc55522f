// Host-side tests for the page event helpers.
// The main crate is wasm-only, so we include the module directly.

#![allow(dead_code)]
mod events {
    include!("../src/events.rs");
}

use events::MountGuard;

#[test]
fn only_the_first_mount_is_accepted() {
    static GUARD: MountGuard = MountGuard::new();
    assert!(GUARD.claim());
    assert!(!GUARD.claim());
    assert!(!GUARD.claim());
}

#[test]
fn a_mount_that_did_not_happen_can_be_retried() {
    let guard = MountGuard::default();
    assert!(guard.claim());
    guard.release();
    assert!(guard.claim());
    assert!(!guard.claim());
}
