// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_type::Value;
use serde::{Deserialize, Serialize};

/// One raw record as delivered by the transport, values in schema order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
	values: Vec<Value>,
}

impl RawRow {
	pub fn new(values: Vec<Value>) -> Self {
		Self {
			values,
		}
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// 0-based. Out-of-range positions read as absent.
	pub fn is_null(&self, index: usize) -> bool {
		self.values.get(index).is_none_or(Value::is_undefined)
	}

	/// 0-based. Out-of-range positions read as [`Value::Undefined`].
	pub fn value(&self, index: usize) -> Value {
		self.values.get(index).cloned().unwrap_or(Value::Undefined)
	}
}

/// The seam between the cursor and whatever delivers records: a frozen
/// synthetic table or a live transport adapter. Pull-based and
/// forward-only.
pub trait RowStream {
	fn is_exhausted(&self) -> bool;

	/// The next record, or `None` once the stream is drained.
	fn one(&mut self) -> Option<RawRow>;
}

impl<S: RowStream + ?Sized> RowStream for Box<S> {
	fn is_exhausted(&self) -> bool {
		(**self).is_exhausted()
	}

	fn one(&mut self) -> Option<RawRow> {
		(**self).one()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_out_of_range_reads_as_absent() {
		let row = RawRow::new(vec![Value::int4(1)]);
		assert!(!row.is_null(0));
		assert!(row.is_null(1));
		assert_eq!(row.value(1), Value::Undefined);
	}
}
