// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::value::Type;

pub mod coercion;
pub mod cursor;
pub mod schema;

/// A structured, renderable description of a single failure.
///
/// Codes are stable and asserted on by callers and tests; everything else is
/// advisory text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub column: Option<DiagnosticColumn>,
	pub cause: Option<Box<Diagnostic>>,
}

/// The column a cursor-level diagnostic refers to, when one is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticColumn {
	pub name: String,
	pub ty: Type,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "[{}] {}", self.code, self.message)?;
		if let Some(label) = &self.label {
			write!(f, ": {}", label)?;
		}
		if let Some(column) = &self.column {
			write!(f, " (column `{}` of type {})", column.name, column.ty)?;
		}
		if let Some(help) = &self.help {
			write!(f, "\nhelp: {}", help)?;
		}
		for note in &self.notes {
			write!(f, "\nnote: {}", note)?;
		}
		if let Some(cause) = &self.cause {
			write!(f, "\ncaused by: {}", cause)?;
		}
		Ok(())
	}
}

impl Diagnostic {
	pub fn with_column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.column = Some(DiagnosticColumn {
			name: name.into(),
			ty,
		});
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_render_code_and_message() {
		let diagnostic = Diagnostic {
			code: "TEST_001".to_string(),
			message: "something went sideways".to_string(),
			label: Some("right here".to_string()),
			help: Some("try the other thing".to_string()),
			notes: vec!["a note".to_string()],
			column: None,
			cause: None,
		};

		let rendered = diagnostic.to_string();
		assert!(rendered.contains("[TEST_001]"));
		assert!(rendered.contains("something went sideways"));
		assert!(rendered.contains("right here"));
		assert!(rendered.contains("help: try the other thing"));
		assert!(rendered.contains("note: a note"));
	}

	#[test]
	fn test_render_column() {
		let diagnostic = Diagnostic {
			code: "TEST_002".to_string(),
			message: "bad column".to_string(),
			label: None,
			help: None,
			notes: vec![],
			column: None,
			cause: None,
		}
		.with_column("ks", Type::Utf8);

		let rendered = diagnostic.to_string();
		assert!(rendered.contains("column `ks`"));
		assert!(rendered.contains("Utf8"));
	}
}
