//! Client configuration: signing options and OneClick endpoint sets.

pub mod endpoints;
pub mod signing;

pub use endpoints::*;
pub use signing::*;
