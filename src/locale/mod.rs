//! Locale table, per-request resolution and message bundles.

pub mod bundle;
pub mod registry;
pub mod resolver;

pub use bundle::MessageBundles;
pub use registry::{Locale, LocaleError, LocaleRegistry};
pub use resolver::{Resolution, resolve};
