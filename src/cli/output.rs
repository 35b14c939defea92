use anyhow::Result;
use chipsearch::Outcome;
use serde_json::json;

/// Print one chosen value per line.
pub(crate) fn print_plain(outcome: &Outcome) {
	if !outcome.accepted {
		eprintln!("Selection cancelled");
		return;
	}

	for value in &outcome.values {
		println!("{value}");
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &Outcome) -> Result<String> {
	let payload = json!({
		"accepted": outcome.accepted,
		"values": outcome.values,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &Outcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	#[test]
	fn json_format_lists_values_in_order() {
		let outcome = Outcome {
			accepted: true,
			values: vec!["b".into(), "a".into()],
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["accepted"], true);
		assert_eq!(value["values"][0], "b");
		assert_eq!(value["values"][1], "a");
	}

	#[test]
	fn cancelled_outcome_has_no_values() {
		let outcome = Outcome {
			accepted: false,
			values: Vec::new(),
		};
		let value: Value = serde_json::from_str(&format_outcome_json(&outcome).expect("json"))
			.expect("parse");
		assert_eq!(value["accepted"], false);
		assert_eq!(value["values"].as_array().map(Vec::len), Some(0));
	}
}
