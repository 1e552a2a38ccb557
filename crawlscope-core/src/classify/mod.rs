//! Crawler identification from user-agent strings.
//!
//! A [`SignatureRegistry`] is an ordered list of named, case-insensitive
//! substring patterns. Classification returns the first signature that
//! occurs anywhere in the user agent, so registry order is precedence: a
//! specific variant (`Googlebot-Image`) has to come before the generic name
//! it contains (`Googlebot`). [`SignatureRegistry::new`] refuses orders that
//! break this.

mod registry;
mod signature;

#[cfg(test)]
mod tests;

pub use registry::{GOOGLEBOT_FAMILY, LLM_BOTS, SEARCH_BOTS, SignatureRegistry, builtin_signatures};
pub use signature::{BotSignature, SignatureError};
