//! Terminal host for the chip widgets.
//!
//! [`App`] owns a widget, routes crossterm key and mouse events to it, keeps
//! the blur grace deadline and draws everything with ratatui. [`run`] drives
//! an [`App`] on a real terminal.

mod app;
mod keys;
mod render;
mod runtime;
mod surface;
#[cfg(test)]
mod tests;
pub mod theme;

pub use app::{App, Focus, Outcome};
pub use runtime::run;
pub use surface::WidgetSurface;
pub use theme::Theme;
