// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;

pub fn no_current_row() -> Diagnostic {
	Diagnostic {
		code: "CURSOR_001".to_string(),
		message: "cursor is not positioned on a row".to_string(),
		label: None,
		help: Some(
			"call advance() and check that it reported a row before reading values"
				.to_string(),
		),
		notes: vec![],
		column: None,
		cause: None,
	}
}

pub fn cursor_closed() -> Diagnostic {
	Diagnostic {
		code: "CURSOR_002".to_string(),
		message: "cursor is closed".to_string(),
		label: None,
		help: None,
		notes: vec![],
		column: None,
		cause: None,
	}
}
