// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Synthesizes relational catalog metadata from the cluster's system
//! tables.
//!
//! Every operation issues read-only queries through the injected session,
//! reshapes the rows into the fixed metadata column layout and returns the
//! result as an ordinary cursor.

mod columns;
mod indexes;
mod keys;
mod schemas;
mod tables;

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};
pub use keys::PrimaryKeyColumn;
use tracing::debug;

use crate::session::{QueryCursor, Session};

/// Catalog metadata reader over an explicitly owned session.
pub struct Introspector<S: Session> {
	session: S,
	catalog: String,
}

impl<S: Session> Introspector<S> {
	pub fn new(session: S, catalog: impl Into<String>) -> Self {
		Self {
			session,
			catalog: catalog.into(),
		}
	}

	pub fn catalog(&self) -> &str {
		&self.catalog
	}

	/// Single-row cursor listing the table types this catalog knows, which
	/// is just "TABLE".
	pub fn table_types(&self) -> Result<QueryCursor> {
		let mut result = SyntheticTable::new(vec![("TABLE_TYPE", Type::Utf8)]);
		result.append(vec![Value::utf8("TABLE")])?;
		Ok(result.into_boxed_cursor())
	}

	/// Single-row cursor naming this catalog.
	pub fn catalogs(&self) -> Result<QueryCursor> {
		let mut result = SyntheticTable::new(vec![("TABLE_CAT", Type::Utf8)]);
		result.append(vec![Value::utf8(self.catalog.clone())])?;
		Ok(result.into_boxed_cursor())
	}

	fn run(&mut self, query: String) -> Result<QueryCursor> {
		debug!(query = %query, "catalog query");
		self.session.execute(&query)
	}
}

/// `"%"` and absent both mean unfiltered. Anything else becomes an
/// exact-equality predicate; glob matching beyond match-all is not
/// supported.
fn normalize_pattern(pattern: Option<&str>) -> Option<&str> {
	match pattern {
		Some("%") | None => None,
		some => some,
	}
}

fn build_query(table: &str, projection: &[&str], filters: &[(&str, Option<&str>)]) -> String {
	let mut query = format!("SELECT {} FROM {}", projection.join(", "), table);
	let clauses: Vec<String> = filters
		.iter()
		.filter_map(|(column, value)| value.map(|v| format!("{} = '{}'", column, v)))
		.collect();
	if !clauses.is_empty() {
		query.push_str(" WHERE ");
		query.push_str(&clauses.join(" AND "));
		query.push_str(" ALLOW FILTERING");
	}
	query
}

fn text(value: Option<String>) -> Value {
	value.map(Value::Utf8).unwrap_or(Value::Undefined)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::FakeSession;

	#[test]
	fn test_normalize_pattern() {
		assert_eq!(normalize_pattern(None), None);
		assert_eq!(normalize_pattern(Some("%")), None);
		assert_eq!(normalize_pattern(Some("ks")), Some("ks"));
	}

	#[test]
	fn test_build_query_without_filters() {
		let query = build_query("system.schema_keyspaces", &["keyspace_name"], &[("keyspace_name", None)]);
		assert_eq!(query, "SELECT keyspace_name FROM system.schema_keyspaces");
	}

	#[test]
	fn test_build_query_with_filters() {
		let query = build_query(
			"system.schema_columns",
			&["column_name"],
			&[("keyspace_name", Some("ks")), ("columnfamily_name", Some("t"))],
		);
		assert_eq!(
			query,
			"SELECT column_name FROM system.schema_columns WHERE keyspace_name = 'ks' AND columnfamily_name = 't' ALLOW FILTERING"
		);
	}

	#[test]
	fn test_table_types() {
		let introspector = Introspector::new(FakeSession::new(), "cluster");
		let mut cursor = introspector.table_types().unwrap();
		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_string("TABLE_TYPE").unwrap(), Some("TABLE".to_string()));
		assert!(!cursor.advance().unwrap());
	}

	#[test]
	fn test_catalogs() {
		let introspector = Introspector::new(FakeSession::new(), "cluster");
		let mut cursor = introspector.catalogs().unwrap();
		assert!(cursor.advance().unwrap());
		assert_eq!(cursor.get_string("TABLE_CAT").unwrap(), Some("cluster".to_string()));
		assert!(!cursor.advance().unwrap());
	}
}
