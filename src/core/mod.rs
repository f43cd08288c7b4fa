//! Collaborators outside the menu engine.
//!
//! - `launcher`: runs the VPN client on the chosen profile

pub mod launcher;

pub use launcher::connect;
