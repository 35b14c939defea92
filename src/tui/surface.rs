use crate::search::SearcherCallbacks;
use crate::searcher::Searcher;
use crate::selection::{EntryId, IdentityStrategy};
use crate::widgets::{Chip, MultipleSelect, PhraseBuilder, PhraseModel, SelectModel};

/// What the terminal host needs from a chip widget.
pub trait WidgetSurface {
	type Callbacks: SearcherCallbacks;

	fn searcher(&self) -> &Searcher<Self::Callbacks>;

	fn searcher_mut(&mut self) -> &mut Searcher<Self::Callbacks>;

	/// Chips in display order.
	fn chips(&self) -> Vec<Chip<'_>>;

	fn placeholder(&self) -> Option<&str>;

	fn remove_icon(&self) -> &str {
		"X"
	}

	/// The remove icon of the chip with `id` was clicked.
	fn remove_chip(&mut self, id: &EntryId);

	/// The chosen values, in order.
	fn values(&self) -> Vec<String>;

	fn handle_global_click(&mut self, inside: bool);

	fn handle_display_escape(&mut self);
}

impl WidgetSurface for MultipleSelect {
	type Callbacks = SelectModel;

	fn searcher(&self) -> &Searcher<SelectModel> {
		MultipleSelect::searcher(self)
	}

	fn searcher_mut(&mut self) -> &mut Searcher<SelectModel> {
		MultipleSelect::searcher_mut(self)
	}

	fn chips(&self) -> Vec<Chip<'_>> {
		MultipleSelect::chips(self).collect()
	}

	fn placeholder(&self) -> Option<&str> {
		MultipleSelect::placeholder(self)
	}

	fn remove_icon(&self) -> &str {
		MultipleSelect::remove_icon(self)
	}

	fn remove_chip(&mut self, id: &EntryId) {
		if let EntryId::Value(value) = id {
			let value = value.clone();
			let _ = self.remove_option_with_value(&value);
		}
	}

	fn values(&self) -> Vec<String> {
		self.selected_values()
	}

	fn handle_global_click(&mut self, inside: bool) {
		MultipleSelect::handle_global_click(self, inside);
	}

	fn handle_display_escape(&mut self) {
		MultipleSelect::handle_display_escape(self);
	}
}

impl<S: IdentityStrategy> WidgetSurface for PhraseBuilder<S> {
	type Callbacks = PhraseModel<S>;

	fn searcher(&self) -> &Searcher<PhraseModel<S>> {
		PhraseBuilder::searcher(self)
	}

	fn searcher_mut(&mut self) -> &mut Searcher<PhraseModel<S>> {
		PhraseBuilder::searcher_mut(self)
	}

	fn chips(&self) -> Vec<Chip<'_>> {
		PhraseBuilder::chips(self).collect()
	}

	fn placeholder(&self) -> Option<&str> {
		PhraseBuilder::placeholder(self)
	}

	fn remove_chip(&mut self, id: &EntryId) {
		PhraseBuilder::remove_chip(self, id);
	}

	fn values(&self) -> Vec<String> {
		self.words()
	}

	fn handle_global_click(&mut self, inside: bool) {
		PhraseBuilder::handle_global_click(self, inside);
	}

	fn handle_display_escape(&mut self) {
		PhraseBuilder::handle_display_escape(self);
	}
}
