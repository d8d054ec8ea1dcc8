// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};

use super::{Introspector, build_query, normalize_pattern, text};
use crate::session::{QueryCursor, Session};

const SCHEMA_SHAPE: [(&str, Type); 2] =
	[("TABLE_SCHEM", Type::Utf8), ("TABLE_CATALOG", Type::Utf8)];

impl<S: Session> Introspector<S> {
	/// Keyspaces matching the pattern, sorted by name.
	pub fn list_schemas(&mut self, pattern: Option<&str>) -> Result<QueryCursor> {
		let query = build_query(
			"system.schema_keyspaces",
			&["keyspace_name"],
			&[("keyspace_name", normalize_pattern(pattern))],
		);
		let mut cursor = self.run(query)?;

		let mut result = SyntheticTable::new(SCHEMA_SHAPE);
		while cursor.advance()? {
			let keyspace = cursor.get_string("keyspace_name")?;
			result.append(vec![text(keyspace), Value::utf8(self.catalog.clone())])?;
		}
		result.sort_by(&[1])?;
		Ok(result.into_boxed_cursor())
	}
}
