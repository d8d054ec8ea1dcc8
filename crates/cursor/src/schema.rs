// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_type::Type;
use serde::{Deserialize, Serialize};

/// A named, typed column position in a result schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	pub name: String,
	pub ty: Type,
}

/// The ordered column list of a result. Duplicate names are allowed;
/// lookup by name resolves to the first match. Immutable once a cursor is
/// built over it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
	columns: Vec<Column>,
}

impl ColumnSchema {
	pub fn new(columns: impl IntoIterator<Item = (impl Into<String>, Type)>) -> Self {
		Self {
			columns: columns
				.into_iter()
				.map(|(name, ty)| Column {
					name: name.into(),
					ty,
				})
				.collect(),
		}
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	/// 0-based access.
	pub fn column(&self, index: usize) -> Option<&Column> {
		self.columns.get(index)
	}

	/// 0-based index of the first column with this exact name.
	pub fn index_of(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|column| column.name == name)
	}

	pub(crate) fn set_type(&mut self, index: usize, ty: Type) {
		if let Some(column) = self.columns.get_mut(index) {
			column.ty = ty;
		}
	}
}
