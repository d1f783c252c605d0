// Divert container types
// Central location for the optional/outcome containers, their combinator
// surface, and the unwrap signaling shared with the propagation engine

// Module structure
mod convert;
mod error;
mod macros;

// Container modules
pub mod opt;
pub mod outcome;

// Shared with divert-engine; not a supported API surface
#[doc(hidden)]
pub mod signal;

// Public exports (Consolidated)
pub use error::{asserted_message, MismatchError};
pub use opt::Opt::{self, Absent, Present};
pub use outcome::Outcome::{self, Failure, Success};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
