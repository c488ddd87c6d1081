//! Client identifiers, redacted secrets, and the credential pair used for signing.

pub mod credentials;
pub mod id;
pub mod secret;

pub use credentials::*;
pub use id::*;
pub use secret::*;
