use thiserror::Error;

/// Errors raised by the user-facing widget entry points.
///
/// Low-level selection operations never fail; these variants only surface
/// where the caller asserted that a value exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
	/// A by-value operation referenced an option the widget doesn't know.
	#[error("widget doesn't contain an option with the value [{value}]")]
	OptionNotFound { value: String },
	/// Removal of the highlighted chip was requested but no chip is marked.
	#[error("no selected entry is highlighted for removal")]
	NothingMarked,
}

impl WidgetError {
	pub(crate) fn not_found(value: impl Into<String>) -> Self {
		Self::OptionNotFound {
			value: value.into(),
		}
	}
}
