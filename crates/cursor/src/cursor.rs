// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_type::{
	Result, Value, coerce,
	error::diagnostic::{cursor, schema},
	return_error,
	value::{Blob, Date, Decimal, Time, Timestamp, VarInt},
};

use crate::{
	row::{RawRow, RowStream},
	schema::ColumnSchema,
};

/// Selects a column either by 1-based position or by name.
#[derive(Clone, Copy, Debug)]
pub enum ColumnRef<'a> {
	Position(usize),
	Name(&'a str),
}

impl From<usize> for ColumnRef<'_> {
	fn from(position: usize) -> Self {
		ColumnRef::Position(position)
	}
}

impl<'a> From<&'a str> for ColumnRef<'a> {
	fn from(name: &'a str) -> Self {
		ColumnRef::Name(name)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
	BeforeFirst,
	OnRow,
	AfterLast,
	Closed,
}

/// A forward-only cursor over a row stream, reading values through the
/// coercion rules.
///
/// Starts before the first row; [`TypedCursor::advance`] moves strictly
/// forward and reports whether a row became current. Typed getters require
/// a current row and never move the cursor; a failed read leaves the cursor
/// exactly where it was.
pub struct TypedCursor<S: RowStream> {
	schema: ColumnSchema,
	stream: Option<S>,
	row: Option<RawRow>,
	state: State,
	row_number: u64,
	was_null: bool,
}

impl<S: RowStream> TypedCursor<S> {
	pub fn new(schema: ColumnSchema, stream: S) -> Self {
		Self {
			schema,
			stream: Some(stream),
			row: None,
			state: State::BeforeFirst,
			row_number: 0,
			was_null: false,
		}
	}

	pub fn schema(&self) -> &ColumnSchema {
		&self.schema
	}

	/// 1-based number of the current row, 0 before the first row and
	/// after the last.
	pub fn row_number(&self) -> u64 {
		match self.state {
			State::OnRow => self.row_number,
			_ => 0,
		}
	}

	/// Whether the value read by the most recent getter was absent.
	pub fn was_null(&self) -> bool {
		self.was_null
	}

	pub fn is_closed(&self) -> bool {
		self.state == State::Closed
	}

	/// Moves to the next row. `Ok(true)` when a row became current,
	/// `Ok(false)` at exhaustion; once exhausted it keeps reporting
	/// `Ok(false)`.
	pub fn advance(&mut self) -> Result<bool> {
		if self.state == State::Closed {
			return_error!(cursor::cursor_closed());
		}
		let next = self.stream.as_mut().and_then(RowStream::one);
		match next {
			Some(row) => {
				self.row = Some(row);
				self.state = State::OnRow;
				self.row_number += 1;
				Ok(true)
			}
			None => {
				self.row = None;
				self.state = State::AfterLast;
				Ok(false)
			}
		}
	}

	/// Releases the stream. Idempotent; every later read or advance fails.
	pub fn close(&mut self) {
		self.stream = None;
		self.row = None;
		self.state = State::Closed;
	}

	pub fn get_bool<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<bool> {
		let value = self.read(column.into())?;
		coerce::to_bool(&value)
	}

	pub fn get_i8<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<i8> {
		let value = self.read(column.into())?;
		coerce::to_i8(&value)
	}

	pub fn get_i16<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<i16> {
		let value = self.read(column.into())?;
		coerce::to_i16(&value)
	}

	pub fn get_i32<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<i32> {
		let value = self.read(column.into())?;
		coerce::to_i32(&value)
	}

	pub fn get_i64<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<i64> {
		let value = self.read(column.into())?;
		coerce::to_i64(&value)
	}

	pub fn get_f32<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<f32> {
		let value = self.read(column.into())?;
		coerce::to_f32(&value)
	}

	pub fn get_f64<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<f64> {
		let value = self.read(column.into())?;
		coerce::to_f64(&value)
	}

	/// Textual rendering of whatever the column holds, `None` when the
	/// value is absent.
	pub fn get_string<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<String>> {
		let value = self.read(column.into())?;
		Ok(coerce::to_text(&value))
	}

	pub fn get_bytes<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<Blob>> {
		let value = self.read(column.into())?;
		coerce::to_blob(&value)
	}

	pub fn get_decimal<'a>(
		&mut self,
		column: impl Into<ColumnRef<'a>>,
	) -> Result<Option<Decimal>> {
		let value = self.read(column.into())?;
		coerce::to_decimal(&value)
	}

	pub fn get_varint<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<VarInt>> {
		let value = self.read(column.into())?;
		coerce::to_varint(&value)
	}

	pub fn get_date<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<Date>> {
		let value = self.read(column.into())?;
		coerce::to_date(&value)
	}

	pub fn get_time<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<Time>> {
		let value = self.read(column.into())?;
		coerce::to_time(&value)
	}

	pub fn get_timestamp<'a>(
		&mut self,
		column: impl Into<ColumnRef<'a>>,
	) -> Result<Option<Timestamp>> {
		let value = self.read(column.into())?;
		coerce::to_timestamp(&value)
	}

	pub fn get_uuid<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Option<uuid::Uuid>> {
		let value = self.read(column.into())?;
		coerce::to_uuid(&value)
	}

	/// The stored value without coercion.
	pub fn get_value<'a>(&mut self, column: impl Into<ColumnRef<'a>>) -> Result<Value> {
		self.read(column.into())
	}

	// State is checked before the selector resolves: a get in the wrong
	// state is a state error even when the selector is also bad.
	fn read(&mut self, column: ColumnRef<'_>) -> Result<Value> {
		match self.state {
			State::Closed => return_error!(cursor::cursor_closed()),
			State::OnRow => {}
			_ => return_error!(cursor::no_current_row()),
		}
		let index = self.resolve(column)?;
		let row = match &self.row {
			Some(row) => row,
			None => return_error!(cursor::no_current_row()),
		};
		let value = row.value(index);
		self.was_null = value.is_undefined();
		Ok(value)
	}

	fn resolve(&self, column: ColumnRef<'_>) -> Result<usize> {
		match column {
			ColumnRef::Position(position) => {
				if position == 0 || position > self.schema.len() {
					return_error!(schema::column_out_of_range(
						position,
						self.schema.len()
					));
				}
				Ok(position - 1)
			}
			ColumnRef::Name(name) => match self.schema.index_of(name) {
				Some(index) => Ok(index),
				None => return_error!(schema::unknown_column(name)),
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use cqlbridge_type::{Type, Value};

	use super::*;

	struct VecStream {
		rows: Vec<RawRow>,
	}

	impl VecStream {
		fn new(rows: Vec<Vec<Value>>) -> Self {
			Self {
				rows: rows.into_iter().map(RawRow::new).rev().collect(),
			}
		}
	}

	impl RowStream for VecStream {
		fn is_exhausted(&self) -> bool {
			self.rows.is_empty()
		}

		fn one(&mut self) -> Option<RawRow> {
			self.rows.pop()
		}
	}

	fn cursor_of(rows: Vec<Vec<Value>>) -> TypedCursor<VecStream> {
		let schema = ColumnSchema::new(vec![("id", Type::Int8), ("name", Type::Utf8)]);
		TypedCursor::new(schema, VecStream::new(rows))
	}

	#[test]
	fn test_read_before_advance_fails() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		let err = cursor.get_i64(1).unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_001");
	}

	#[test]
	fn test_state_error_wins_over_bad_selector() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		let err = cursor.get_i64(9).unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_001");
		let err = cursor.get_string("nope").unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_001");

		cursor.close();
		let err = cursor.get_i64(9).unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_002");
	}

	#[test]
	fn test_forward_iteration() {
		let mut cursor = cursor_of(vec![
			vec![Value::int8(1), Value::utf8("a")],
			vec![Value::int8(2), Value::utf8("b")],
		]);
		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.row_number(), 1);
		assert_eq!(cursor.get_i64("id").unwrap(), 1);
		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_string("name").unwrap(), Some("b".to_string()));
		assert!(!cursor.advance().unwrap());
		assert_eq!(cursor.row_number(), 0);
	}

	#[test]
	fn test_advance_after_exhaustion_keeps_reporting_false() {
		let mut cursor = cursor_of(vec![]);
		assert!(!cursor.advance().unwrap());
		assert!(!cursor.advance().unwrap());
	}

	#[test]
	fn test_read_after_exhaustion_fails() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		assert!(cursor.advance().unwrap());
		assert!(!cursor.advance().unwrap());
		let err = cursor.get_i64(1).unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_001");
	}

	#[test]
	fn test_close_is_idempotent_and_terminal() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		cursor.close();
		cursor.close();
		let err = cursor.advance().unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_002");
		let err = cursor.get_i64(1).unwrap_err();
		assert_eq!(err.diagnostic().code, "CURSOR_002");
	}

	#[test]
	fn test_position_bounds() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		cursor.advance().unwrap();
		assert_eq!(cursor.get_i64(1).unwrap(), 1);
		let err = cursor.get_i64(0).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_002");
		let err = cursor.get_i64(3).unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_002");
	}

	#[test]
	fn test_unknown_name() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("a")]]);
		cursor.advance().unwrap();
		let err = cursor.get_string("nope").unwrap_err();
		assert_eq!(err.diagnostic().code, "SCHEMA_001");
	}

	#[test]
	fn test_was_null_tracks_latest_read() {
		let mut cursor = cursor_of(vec![vec![Value::Undefined, Value::utf8("a")]]);
		cursor.advance().unwrap();
		assert_eq!(cursor.get_i64("id").unwrap(), 0);
		assert!(cursor.was_null());
		assert_eq!(cursor.get_string("name").unwrap(), Some("a".to_string()));
		assert!(!cursor.was_null());
	}

	#[test]
	fn test_failed_read_leaves_cursor_on_row() {
		let mut cursor = cursor_of(vec![vec![Value::int8(1), Value::utf8("oops")]]);
		cursor.advance().unwrap();
		assert!(cursor.get_i64("name").is_err());
		assert_eq!(cursor.row_number(), 1);
		assert_eq!(cursor.get_i64("id").unwrap(), 1);
	}

	#[test]
	fn test_get_string_renders_any_type() {
		let mut cursor = cursor_of(vec![vec![Value::int8(42), Value::Undefined]]);
		cursor.advance().unwrap();
		assert_eq!(cursor.get_string("id").unwrap(), Some("42".to_string()));
		assert_eq!(cursor.get_string("name").unwrap(), None);
		assert!(cursor.was_null());
	}
}
