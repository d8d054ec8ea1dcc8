// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::collections::VecDeque;

use cqlbridge_type::{Result, Type, Value, error::diagnostic::schema, return_error};

use crate::{
	cursor::TypedCursor,
	row::{RawRow, RowStream},
	schema::ColumnSchema,
};

/// An in-memory result under construction: fixed column schema, rows
/// appended one at a time, then frozen into a cursor.
///
/// Appends validate arity only. Values are stored as-is and coerced when
/// read, so a type mismatch surfaces at the getter that asks for it, not
/// at append time.
pub struct SyntheticTable {
	schema: ColumnSchema,
	rows: Vec<Vec<Value>>,
	infer_types: bool,
}

impl SyntheticTable {
	pub fn new(columns: impl IntoIterator<Item = (impl Into<String>, Type)>) -> Self {
		Self {
			schema: ColumnSchema::new(columns),
			rows: Vec::new(),
			infer_types: false,
		}
	}

	/// Builds a table with named but untyped columns; the types are fixed
	/// from the first appended record. Only `Bool`, `Int4` and `Int8` are
	/// recognized; everything else becomes `Utf8`. This is a best-effort
	/// fallback for callers that assemble rows without a declared schema,
	/// not a general inferencer.
	pub fn inferred(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			schema: ColumnSchema::new(
				names.into_iter().map(|name| (name, Type::Undefined)),
			),
			rows: Vec::new(),
			infer_types: true,
		}
	}

	pub fn schema(&self) -> &ColumnSchema {
		&self.schema
	}

	pub fn row_count(&self) -> usize {
		self.rows.len()
	}

	/// Appends one record. Fails only when the value count does not match
	/// the column count.
	pub fn append(&mut self, values: Vec<Value>) -> Result<()> {
		if values.len() != self.schema.len() {
			return_error!(schema::arity_mismatch(values.len(), self.schema.len()));
		}
		if self.infer_types && self.rows.is_empty() {
			for (index, value) in values.iter().enumerate() {
				self.schema.set_type(index, infer_type(value));
			}
		}
		self.rows.push(values);
		Ok(())
	}

	/// Stable sort on the textual rendering of the key columns, 1-based
	/// positions, left-to-right tie-break.
	pub fn sort_by(&mut self, positions: &[usize]) -> Result<()> {
		for &position in positions {
			if position == 0 || position > self.schema.len() {
				return_error!(schema::column_out_of_range(
					position,
					self.schema.len()
				));
			}
		}
		self.rows.sort_by(|a, b| {
			for &position in positions {
				let index = position - 1;
				let ordering = a[index].to_string().cmp(&b[index].to_string());
				if ordering.is_ne() {
					return ordering;
				}
			}
			std::cmp::Ordering::Equal
		});
		Ok(())
	}

	/// Freezes the rows and hands them to a cursor. Consumes the builder,
	/// so nothing can be appended once a cursor exists.
	pub fn into_cursor(self) -> TypedCursor<TableStream> {
		TypedCursor::new(
			self.schema,
			TableStream {
				rows: self.rows.into_iter().map(RawRow::new).collect(),
			},
		)
	}

	/// As [`SyntheticTable::into_cursor`], type-erased for callers that
	/// hold cursors over mixed stream sources.
	pub fn into_boxed_cursor(self) -> TypedCursor<Box<dyn RowStream>> {
		let schema = self.schema;
		let stream: Box<dyn RowStream> = Box::new(TableStream {
			rows: self.rows.into_iter().map(RawRow::new).collect(),
		});
		TypedCursor::new(schema, stream)
	}
}

fn infer_type(value: &Value) -> Type {
	match value {
		Value::Bool(_) => Type::Bool,
		Value::Int4(_) => Type::Int4,
		Value::Int8(_) => Type::Int8,
		_ => Type::Utf8,
	}
}

/// The frozen rows of a synthetic table.
pub struct TableStream {
	rows: VecDeque<RawRow>,
}

impl RowStream for TableStream {
	fn is_exhausted(&self) -> bool {
		self.rows.is_empty()
	}

	fn one(&mut self) -> Option<RawRow> {
		self.rows.pop_front()
	}
}
