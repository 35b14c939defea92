//! Chip-style multi-select and phrase-builder widgets driven by an
//! incremental searcher, with a ratatui host to run them in a terminal.
//!
//! The root module re-exports the types most embedders need so they can
//! build a widget and run it without digging through the module hierarchy.

pub mod app_dirs;
pub mod error;
pub mod logging;
pub mod search;
pub mod searcher;
pub mod selection;
pub mod tui;
pub mod widgets;

pub use error::WidgetError;
pub use search::{MatchMode, SearchQuery, SearchResult, SearcherCallbacks};
pub use searcher::{CommitOutcome, Key, KeyResponse, SearchInput, Searcher};
pub use selection::{EntryId, SelectedValue, SelectionSet, SyntheticIds, ValueKeyed};
pub use tui::{App, Outcome, Theme, WidgetSurface, run};
pub use widgets::{MultipleSelect, PhraseBuilder, SelectOption};
