//! Static fallback content and the policy deciding when to use it.

mod data;
mod policy;

pub use data::FallbackSet;
pub use policy::{should_use_fallback, FallbackPolicy};
