// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};

use super::{Introspector, build_query, normalize_pattern, text};
use crate::session::{QueryCursor, Session};

const TABLE_SHAPE: [(&str, Type); 10] = [
	("TABLE_CAT", Type::Utf8),
	("TABLE_SCHEM", Type::Utf8),
	("TABLE_NAME", Type::Utf8),
	("TABLE_TYPE", Type::Utf8),
	("REMARKS", Type::Utf8),
	("TYPE_CAT", Type::Utf8),
	("TYPE_SCHEM", Type::Utf8),
	("TYPE_NAME", Type::Utf8),
	("SELF_REFERENCING_COL_NAME", Type::Utf8),
	("REF_GENERATION", Type::Utf8),
];

impl<S: Session> Introspector<S> {
	/// Tables matching the schema and table patterns, in the 10-column
	/// TABLE shape, sorted by (TABLE_SCHEM, TABLE_NAME).
	pub fn list_tables(
		&mut self,
		schema: Option<&str>,
		table: Option<&str>,
	) -> Result<QueryCursor> {
		let query = build_query(
			"system.schema_columnfamilies",
			&["keyspace_name", "columnfamily_name", "comment"],
			&[
				("keyspace_name", normalize_pattern(schema)),
				("columnfamily_name", normalize_pattern(table)),
			],
		);
		let mut cursor = self.run(query)?;

		let mut result = SyntheticTable::new(TABLE_SHAPE);
		while cursor.advance()? {
			let keyspace = cursor.get_string("keyspace_name")?;
			let table = cursor.get_string("columnfamily_name")?;
			let comment = cursor.get_string("comment")?;
			result.append(vec![
				Value::utf8(self.catalog.clone()),
				text(keyspace),
				text(table),
				Value::utf8("TABLE"),
				text(comment),
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
			])?;
		}
		result.sort_by(&[2, 3])?;
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
			("comment", Type::Utf8),
		]
	}

	#[test]
	fn test_shape_and_sorting() {
		let mut session = FakeSession::new();
		session.push(
			source_columns(),
			vec![
				vec![Value::utf8("ks2"), Value::utf8("users"), Value::Undefined],
				vec![Value::utf8("ks1"), Value::utf8("zebras"), Value::utf8("herd")],
				vec![Value::utf8("ks1"), Value::utf8("apples"), Value::Undefined],
			],
		);
		let mut introspector = Introspector::new(session, "cluster");

		let mut cursor = introspector.list_tables(None, None).unwrap();
		assert_eq!(cursor.schema().len(), 10);

		let mut seen = Vec::new();
		while cursor.advance().unwrap() {
			assert_eq!(cursor.get_string("TABLE_CAT").unwrap(), Some("cluster".to_string()));
			assert_eq!(cursor.get_string("TABLE_TYPE").unwrap(), Some("TABLE".to_string()));
			assert_eq!(cursor.get_string("REF_GENERATION").unwrap(), None);
			seen.push((
				cursor.get_string("TABLE_SCHEM").unwrap().unwrap(),
				cursor.get_string("TABLE_NAME").unwrap().unwrap(),
			));
		}
		assert_eq!(
			seen,
			vec![
				("ks1".to_string(), "apples".to_string()),
				("ks1".to_string(), "zebras".to_string()),
				("ks2".to_string(), "users".to_string()),
			]
		);
	}

	#[test]
	fn test_patterns_become_equality_filters() {
		let mut session = FakeSession::new();
		session.push(source_columns(), vec![]);
		session.push(source_columns(), vec![]);

		let mut introspector = Introspector::new(&mut session, "cluster");
		introspector.list_tables(Some("ks1"), Some("%")).unwrap();
		introspector.list_tables(None, Some("users")).unwrap();
		drop(introspector);

		assert_eq!(
			session.executed[0],
			"SELECT keyspace_name, columnfamily_name, comment FROM system.schema_columnfamilies WHERE keyspace_name = 'ks1' ALLOW FILTERING"
		);
		assert_eq!(
			session.executed[1],
			"SELECT keyspace_name, columnfamily_name, comment FROM system.schema_columnfamilies WHERE columnfamily_name = 'users' ALLOW FILTERING"
		);
	}
}
