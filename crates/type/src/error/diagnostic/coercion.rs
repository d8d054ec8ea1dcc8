// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use super::Diagnostic;
use crate::value::Type;

pub fn unsupported_coercion(from_type: Type, to_type: Type) -> Diagnostic {
	Diagnostic {
		code: "COERCE_001".to_string(),
		message: format!(
			"no coercion defined from {} to {}",
			from_type, to_type
		),
		label: Some(format!("cannot read a {} value as {}", from_type, to_type)),
		help: Some(
			"request a type the column's native type widens or narrows to"
				.to_string(),
		),
		notes: vec![],
		column: None,
		cause: None,
	}
}

pub fn invalid_text(text: &str, to_type: Type) -> Diagnostic {
	Diagnostic {
		code: "COERCE_002".to_string(),
		message: format!("failed to parse text as {}", to_type),
		label: Some(format!("`{}` is not a valid {}", text, to_type)),
		help: None,
		notes: vec![],
		column: None,
		cause: None,
	}
}

pub fn not_boolean_text(text: &str) -> Diagnostic {
	Diagnostic {
		code: "COERCE_003".to_string(),
		message: format!("`{}` is not a boolean", text),
		label: None,
		help: Some("only \"true\" and \"false\" (any case) convert to Bool".to_string()),
		notes: vec![],
		column: None,
		cause: None,
	}
}
