//! Route table and page navigation.
//!
//! Two static routes, matched history-style on the path component only.

mod routes;

pub use routes::*;

#[cfg(test)]
mod tests;
