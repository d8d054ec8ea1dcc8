// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};
use serde::{Deserialize, Serialize};

use super::{Introspector, build_query};
use crate::{
	session::{QueryCursor, Session},
	validator,
};

/// One primary key column, partition key columns first, then clustering
/// key columns, each in declaration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKeyColumn {
	pub schema: String,
	pub table: String,
	pub name: String,
	pub ty: Type,
}

const PRIMARY_KEY_SHAPE: [(&str, Type); 6] = [
	("TABLE_CAT", Type::Utf8),
	("TABLE_SCHEM", Type::Utf8),
	("TABLE_NAME", Type::Utf8),
	("COLUMN_NAME", Type::Utf8),
	("KEY_SEQ", Type::Int4),
	("PK_NAME", Type::Utf8),
];

impl<S: Session> Introspector<S> {
	/// The primary key columns of one table as typed descriptors. The
	/// table's single catalog row stores the partition and clustering
	/// keys as alias lists zipped against (possibly composite) key
	/// validators; an alias without a validator at its position gets
	/// `Type::Other`. An unknown table yields no columns.
	pub fn primary_key_columns(
		&mut self,
		schema: &str,
		table: &str,
	) -> Result<Vec<PrimaryKeyColumn>> {
		let query = build_query(
			"system.schema_columnfamilies",
			&["key_aliases", "key_validator", "column_aliases", "comparator"],
			&[("keyspace_name", Some(schema)), ("columnfamily_name", Some(table))],
		);
		let mut cursor = self.run(query)?;
		if !cursor.advance()? {
			return Ok(Vec::new());
		}

		let mut columns = Vec::new();
		for (alias_column, validator_column) in
			[("key_aliases", "key_validator"), ("column_aliases", "comparator")]
		{
			let raw_aliases = cursor.get_string(alias_column)?.unwrap_or_default();
			let raw_validator = cursor.get_string(validator_column)?.unwrap_or_default();
			let aliases = validator::parse_aliases(&raw_aliases);
			let constituents = validator::decompose(&raw_validator);
			for (name, ty) in validator::zip_aliases(&aliases, &constituents) {
				columns.push(PrimaryKeyColumn {
					schema: schema.to_string(),
					table: table.to_string(),
					name,
					ty,
				});
			}
		}
		Ok(columns)
	}

	/// The primary key of one table in the 6-column PRIMARY KEY shape,
	/// KEY_SEQ counting from 1 across partition and clustering keys.
	pub fn list_primary_keys(&mut self, schema: &str, table: &str) -> Result<QueryCursor> {
		let columns = self.primary_key_columns(schema, table)?;

		let mut result = SyntheticTable::new(PRIMARY_KEY_SHAPE);
		for (index, column) in columns.into_iter().enumerate() {
			result.append(vec![
				Value::utf8(self.catalog.clone()),
				Value::utf8(column.schema),
				Value::utf8(column.table),
				Value::utf8(column.name),
				Value::int4(index as i32 + 1),
				Value::Undefined,
			])?;
		}
		Ok(result.into_boxed_cursor())
	}
}
