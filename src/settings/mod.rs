//! Configuration loading and resolution.
//!
//! `load` layers the default config files, extra `--config` files and
//! `CHIPSEARCH__*` environment variables, applies CLI overrides and returns
//! a validated [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub use loader::load;
pub use resolved::{ResolvedConfig, WidgetKind};
