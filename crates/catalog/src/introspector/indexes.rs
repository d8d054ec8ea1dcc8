// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};

use super::{Introspector, build_query, normalize_pattern, text};
use crate::session::{QueryCursor, Session};

// tableIndexHashed
const INDEX_TYPE_HASHED: i16 = 3;

const INDEX_SHAPE: [(&str, Type); 13] = [
	("TABLE_CAT", Type::Utf8),
	("TABLE_SCHEM", Type::Utf8),
	("TABLE_NAME", Type::Utf8),
	("NON_UNIQUE", Type::Bool),
	("INDEX_QUALIFIER", Type::Utf8),
	("INDEX_NAME", Type::Utf8),
	("TYPE", Type::Int2),
	("ORDINAL_POSITION", Type::Int2),
	("COLUMN_NAME", Type::Utf8),
	("ASC_OR_DESC", Type::Utf8),
	("CARDINALITY", Type::Int4),
	("PAGES", Type::Int4),
	("FILTER_CONDITION", Type::Utf8),
];

impl<S: Session> Introspector<S> {
	/// Secondary indexes in the 13-column INDEX shape. Columns without an
	/// index type are not indexed and are skipped. Every index here is
	/// non-unique and hashed; cardinality and page counts are unknown and
	/// report -1.
	pub fn list_indexes(
		&mut self,
		schema: Option<&str>,
		table: Option<&str>,
	) -> Result<QueryCursor> {
		let query = build_query(
			"system.schema_columns",
			&[
				"keyspace_name",
				"columnfamily_name",
				"column_name",
				"index_name",
				"index_type",
			],
			&[
				("keyspace_name", normalize_pattern(schema)),
				("columnfamily_name", normalize_pattern(table)),
			],
		);
		let mut cursor = self.run(query)?;

		let mut result = SyntheticTable::new(INDEX_SHAPE);
		let mut ordinal = 0i16;
		while cursor.advance()? {
			if cursor.get_string("index_type")?.is_none() {
				continue;
			}
			let keyspace = cursor.get_string("keyspace_name")?;
			let table = cursor.get_string("columnfamily_name")?;
			let column = cursor.get_string("column_name")?;
			let index_name = cursor.get_string("index_name")?;
			ordinal += 1;

			result.append(vec![
				Value::utf8(self.catalog.clone()),
				text(keyspace),
				text(table),
				Value::bool(true),
				Value::utf8(self.catalog.clone()),
				text(index_name),
				Value::int2(INDEX_TYPE_HASHED),
				Value::int2(ordinal),
				text(column),
				Value::Undefined,
				Value::int4(-1),
				Value::int4(-1),
				Value::Undefined,
			])?;
		}
		Ok(result.into_boxed_cursor())
	}
}

#[cfg(test)]
mod tests {
	use cqlbridge_type::{Type, Value};

	use crate::{Introspector, test_utils::FakeSession};

	fn source_columns() -> Vec<(&'static str, Type)> {
		vec![
			("keyspace_name", Type::Utf8),
			("columnfamily_name", Type::Utf8),
			("column_name", Type::Utf8),
			("index_name", Type::Utf8),
			("index_type", Type::Utf8),
		]
	}

	#[test]
	fn test_unindexed_columns_are_skipped() {
		let mut session = FakeSession::new();
		session.push(
			source_columns(),
			vec![
				vec![
					Value::utf8("ks"),
					Value::utf8("users"),
					Value::utf8("id"),
					Value::Undefined,
					Value::Undefined,
				],
				vec![
					Value::utf8("ks"),
					Value::utf8("users"),
					Value::utf8("email"),
					Value::utf8("users_email_idx"),
					Value::utf8("KEYS"),
				],
			],
		);
		let mut introspector = Introspector::new(session, "cluster");

		let mut cursor = introspector.list_indexes(Some("ks"), Some("users")).unwrap();
		assert_eq!(cursor.schema().len(), 13);

		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_string("INDEX_NAME").unwrap(), Some("users_email_idx".to_string()));
		assert_eq!(cursor.get_string("COLUMN_NAME").unwrap(), Some("email".to_string()));
		assert_eq!(cursor.get_bool("NON_UNIQUE").unwrap(), true);
		assert_eq!(cursor.get_string("INDEX_QUALIFIER").unwrap(), Some("cluster".to_string()));
		assert_eq!(cursor.get_i16("TYPE").unwrap(), 3);
		assert_eq!(cursor.get_i16("ORDINAL_POSITION").unwrap(), 1);
		assert_eq!(cursor.get_i32("CARDINALITY").unwrap(), -1);
		assert_eq!(cursor.get_i32("PAGES").unwrap(), -1);

		assert!(!cursor.advance().unwrap());
	}
}
