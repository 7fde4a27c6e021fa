// Signup and login against the flat-file user store.
// Passwords are compared in plaintext; this is a demo store, not an auth system.

pub mod handlers;
pub mod service;
