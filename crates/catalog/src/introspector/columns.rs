// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};

use super::{Introspector, build_query, normalize_pattern, text};
use crate::{
	session::{QueryCursor, Session},
	validator,
};

const COLUMN_SHAPE: [(&str, Type); 24] = [
	("TABLE_CAT", Type::Utf8),
	("TABLE_SCHEM", Type::Utf8),
	("TABLE_NAME", Type::Utf8),
	("COLUMN_NAME", Type::Utf8),
	("DATA_TYPE", Type::Int4),
	("TYPE_NAME", Type::Utf8),
	("COLUMN_SIZE", Type::Int4),
	("BUFFER_LENGTH", Type::Int4),
	("DECIMAL_DIGITS", Type::Int4),
	("NUM_PREC_RADIX", Type::Int4),
	("NULLABLE", Type::Int4),
	("REMARKS", Type::Utf8),
	("COLUMN_DEF", Type::Utf8),
	("SQL_DATA_TYPE", Type::Int4),
	("SQL_DATETIME_SUB", Type::Int4),
	("CHAR_OCTET_LENGTH", Type::Int4),
	("ORDINAL_POSITION", Type::Int4),
	("IS_NULLABLE", Type::Utf8),
	("SCOPE_CATALOG", Type::Utf8),
	("SCOPE_SCHEMA", Type::Utf8),
	("SCOPE_TABLE", Type::Utf8),
	("SOURCE_DATA_TYPE", Type::Int2),
	("IS_AUTOINCREMENT", Type::Utf8),
	("IS_GENERATEDCOLUMN", Type::Utf8),
];

impl<S: Session> Introspector<S> {
	/// Columns matching the patterns, in the 24-column COLUMN shape.
	/// The column's declared validator resolves to a relational type
	/// through the marshal lookup; an unrecognized validator degrades to
	/// OTHER. Rows stay in result order with ORDINAL_POSITION counting
	/// from 1.
	pub fn list_columns(
		&mut self,
		schema: Option<&str>,
		table: Option<&str>,
		column: Option<&str>,
	) -> Result<QueryCursor> {
		let query = build_query(
			"system.schema_columns",
			&["keyspace_name", "columnfamily_name", "column_name", "validator"],
			&[
				("keyspace_name", normalize_pattern(schema)),
				("columnfamily_name", normalize_pattern(table)),
				("column_name", normalize_pattern(column)),
			],
		);
		let mut cursor = self.run(query)?;

		let mut result = SyntheticTable::new(COLUMN_SHAPE);
		let mut ordinal = 0i32;
		while cursor.advance()? {
			let keyspace = cursor.get_string("keyspace_name")?;
			let table = cursor.get_string("columnfamily_name")?;
			let name = cursor.get_string("column_name")?;
			let raw = cursor.get_string("validator")?.unwrap_or_default();

			let ty = validator::lookup(&raw);
			let type_name = validator::strip_namespace(&raw).to_string();
			let radix = if ty.is_arbitrary_precision() {
				10
			} else {
				2
			};
			let char_octet_length = if ty.is_utf8() {
				Value::int4(i32::MAX)
			} else {
				Value::Undefined
			};
			ordinal += 1;

			result.append(vec![
				Value::utf8(self.catalog.clone()),
				text(keyspace),
				text(table),
				text(name),
				Value::int4(ty.sql_code()),
				Value::utf8(type_name),
				Value::int4(-1),
				Value::Undefined,
				Value::Undefined,
				Value::int4(radix),
				Value::int4(1),
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				char_octet_length,
				Value::int4(ordinal),
				Value::utf8("YES"),
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::Undefined,
				Value::utf8("NO"),
				Value::utf8("NO"),
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
			("validator", Type::Utf8),
		]
	}

	fn row(name: &str, validator: &str) -> Vec<Value> {
		vec![
			Value::utf8("ks"),
			Value::utf8("users"),
			Value::utf8(name),
			Value::utf8(validator),
		]
	}

	#[test]
	fn test_shape_and_type_resolution() {
		let mut session = FakeSession::new();
		session.push(
			source_columns(),
			vec![
				row("id", "org.apache.cassandra.db.marshal.LongType"),
				row("name", "org.apache.cassandra.db.marshal.UTF8Type"),
				row("balance", "org.apache.cassandra.db.marshal.DecimalType"),
			],
		);
		let mut introspector = Introspector::new(session, "cluster");

		let mut cursor = introspector.list_columns(Some("ks"), Some("users"), None).unwrap();
		assert_eq!(cursor.schema().len(), 24);

		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_i32("DATA_TYPE").unwrap(), -5);
		assert_eq!(cursor.get_string("TYPE_NAME").unwrap(), Some("LongType".to_string()));
		assert_eq!(cursor.get_i32("NUM_PREC_RADIX").unwrap(), 2);
		assert_eq!(cursor.get_i32("CHAR_OCTET_LENGTH").unwrap(), 0);
		assert!(cursor.was_null());
		assert_eq!(cursor.get_i32("ORDINAL_POSITION").unwrap(), 1);

		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_i32("DATA_TYPE").unwrap(), 12);
		assert_eq!(cursor.get_i32("CHAR_OCTET_LENGTH").unwrap(), i32::MAX);
		assert_eq!(cursor.get_i32("ORDINAL_POSITION").unwrap(), 2);
		assert_eq!(cursor.get_string("IS_NULLABLE").unwrap(), Some("YES".to_string()));

		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_i32("DATA_TYPE").unwrap(), 3);
		assert_eq!(cursor.get_i32("NUM_PREC_RADIX").unwrap(), 10);
	}

	#[test]
	fn test_unknown_validator_degrades_to_other() {
		let mut session = FakeSession::new();
		session.push(source_columns(), vec![row("payload", "org.example.CustomType")]);
		let mut introspector = Introspector::new(session, "cluster");

		let mut cursor = introspector.list_columns(None, None, None).unwrap();
		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_i32("DATA_TYPE").unwrap(), 1111);
		assert_eq!(cursor.get_string("TYPE_NAME").unwrap(), Some("CustomType".to_string()));
	}
}
