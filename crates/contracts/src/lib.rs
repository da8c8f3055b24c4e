//! Shared domain contracts for the storefront admin panel.
//!
//! Framework-free: compiled into the wasm frontend and tested natively.

pub mod domain;
