// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

pub fn unknown_column(name: &str) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_001".to_string(),
		message: format!("no column named `{}`", name),
		label: None,
		help: Some("column lookup is by first match on the exact name".to_string()),
		notes: vec![],
		column: None,
		cause: None,
	}
}

pub fn column_out_of_range(position: usize, count: usize) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_002".to_string(),
		message: format!(
			"column position {} is out of range, schema has {} columns",
			position, count
		),
		label: Some("positions are 1-based".to_string()),
		help: None,
		notes: vec![],
		column: None,
		cause: None,
	}
}

pub fn arity_mismatch(got: usize, expected: usize) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_003".to_string(),
		message: format!(
			"record has {} values but the schema has {} columns",
			got, expected
		),
		label: None,
		help: None,
		notes: vec![],
		column: None,
		cause: None,
	}
}
