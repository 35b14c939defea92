use frizbee::{Options, match_list};
use serde::Deserialize;

/// Candidate count at which frizbee's prefilter starts paying off.
const PREFILTER_ENABLE_THRESHOLD: usize = 10_000;

/// How a widget narrows its candidates for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
	/// Case-insensitive prefix match, alphabetised.
	#[default]
	Prefix,
	/// Fuzzy match ranked by score.
	Fuzzy,
}

impl MatchMode {
	/// Run the matcher for this mode.
	pub fn matches<'a, I>(self, candidates: I, query: &str) -> Vec<String>
	where
		I: IntoIterator<Item = &'a str>,
	{
		match self {
			Self::Prefix => prefix_matches(candidates, query),
			Self::Fuzzy => fuzzy_matches(candidates, query),
		}
	}

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Prefix => "prefix",
			Self::Fuzzy => "fuzzy",
		}
	}
}

/// Candidates whose text starts with `query`, ignoring case, sorted.
///
/// A blank query matches everything.
pub fn prefix_matches<'a, I>(candidates: I, query: &str) -> Vec<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let needle = query.trim().to_lowercase();
	let mut matches: Vec<String> = candidates
		.into_iter()
		.filter(|candidate| needle.is_empty() || candidate.to_lowercase().starts_with(&needle))
		.map(str::to_string)
		.collect();
	matches.sort();
	matches
}

/// Candidates fuzzily matching `query`, best score first.
///
/// A blank query returns every candidate in alphabetical order.
pub fn fuzzy_matches<'a, I>(candidates: I, query: &str) -> Vec<String>
where
	I: IntoIterator<Item = &'a str>,
{
	let haystacks: Vec<&str> = candidates.into_iter().collect();
	let needle = query.trim();
	if needle.is_empty() {
		let mut all: Vec<String> = haystacks.iter().map(|s| s.to_string()).collect();
		all.sort();
		return all;
	}

	let mut scored: Vec<(u16, usize)> = match_list(needle, &haystacks, options_for(needle, haystacks.len()))
		.into_iter()
		.filter(|entry| entry.score > 0)
		.map(|entry| (entry.score, entry.index_in_haystack as usize))
		.collect();
	scored.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
	scored
		.into_iter()
		.filter_map(|(_, index)| haystacks.get(index).map(|s| s.to_string()))
		.collect()
}

/// Cap `candidates` at `max`, reporting whether anything was dropped.
pub fn limit_results(mut candidates: Vec<String>, max: Option<usize>) -> (Vec<String>, bool) {
	match max {
		Some(max) if candidates.len() > max => {
			candidates.truncate(max);
			(candidates, true)
		}
		_ => (candidates, false),
	}
}

fn options_for(query: &str, dataset_len: usize) -> Options {
	let mut options = Options {
		prefilter: false,
		sort: false,
		..Options::default()
	};

	let length = query.chars().count();
	let mut allowed_typos: u16 = match length {
		0 | 1 => 0,
		2..=4 => 1,
		5..=7 => 2,
		_ => 3,
	};
	if let Ok(max_reasonable) = u16::try_from(length.saturating_sub(1)) {
		allowed_typos = allowed_typos.min(max_reasonable);
	}

	if dataset_len >= PREFILTER_ENABLE_THRESHOLD {
		options.prefilter = true;
		options.max_typos = Some(allowed_typos);
	} else {
		options.max_typos = None;
	}

	options
}
