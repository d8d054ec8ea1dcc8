// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Mapping from the store's column validator class names to relational
//! types.
//!
//! Validators arrive as fully qualified class names
//! (`org.apache.cassandra.db.marshal.UTF8Type`); composite key validators
//! wrap a comma-separated constituent list in `CompositeType(...)`.

use cqlbridge_type::Type;
use tracing::warn;

/// Drops everything up to and including the last `.`, turning a fully
/// qualified validator into its bare class name.
pub fn strip_namespace(validator: &str) -> &str {
	match validator.rfind('.') {
		Some(index) => &validator[index + 1..],
		None => validator,
	}
}

/// Resolves a single (non-composite) validator to a relational type. An
/// unrecognized validator degrades to [`Type::Other`] with a warning; it
/// never fails.
pub fn lookup(validator: &str) -> Type {
	match strip_namespace(validator) {
		"AsciiType" | "UTF8Type" => Type::Utf8,
		"Int32Type" => Type::Int4,
		"LongType" | "CounterColumnType" => Type::Int8,
		"IntegerType" => Type::VarInt,
		"BooleanType" => Type::Bool,
		"BytesType" => Type::Blob,
		"DecimalType" => Type::Decimal,
		"DoubleType" => Type::Float8,
		"FloatType" => Type::Float4,
		"DateType" | "TimestampType" => Type::Timestamp,
		"UUIDType" | "TimeUUIDType" | "LexicalUUIDType" => Type::Uuid,
		other => {
			warn!(validator = other, "unrecognized column validator, degrading to Other");
			Type::Other
		}
	}
}

/// Splits a key validator into its constituent validators: the inner list
/// of a `CompositeType(...)`, or the validator itself when it is not
/// composite.
pub fn decompose(validator: &str) -> Vec<&str> {
	match validator.find("CompositeType(") {
		Some(start) => {
			let inner = &validator[start + "CompositeType(".len()..];
			let inner = inner.strip_suffix(')').unwrap_or(inner);
			inner.split(',').map(str::trim).collect()
		}
		None => vec![validator],
	}
}

/// Parses the bracketed, quoted alias list the catalog stores
/// (`["user_id","tenant"]`) into plain names. An empty list parses to no
/// names.
pub fn parse_aliases(raw: &str) -> Vec<String> {
	let trimmed = raw.trim();
	let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
	let inner = inner.strip_suffix(']').unwrap_or(inner);
	if inner.trim().is_empty() {
		return Vec::new();
	}
	inner.split(',')
		.map(|alias| alias.trim().trim_matches('"').to_string())
		.collect()
}

/// Pairs alias names with the constituent validators by position. An alias
/// without a matching validator gets [`Type::Other`]; validators without an
/// alias are dropped.
pub fn zip_aliases(aliases: &[String], validators: &[&str]) -> Vec<(String, Type)> {
	aliases.iter()
		.enumerate()
		.map(|(index, alias)| {
			let ty = validators.get(index).copied().map(lookup).unwrap_or(Type::Other);
			(alias.clone(), ty)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_strip_namespace() {
		assert_eq!(strip_namespace("org.apache.cassandra.db.marshal.UTF8Type"), "UTF8Type");
		assert_eq!(strip_namespace("LongType"), "LongType");
	}

	#[test]
	fn test_lookup_known_validators() {
		assert_eq!(lookup("org.apache.cassandra.db.marshal.UTF8Type"), Type::Utf8);
		assert_eq!(lookup("org.apache.cassandra.db.marshal.Int32Type"), Type::Int4);
		assert_eq!(lookup("LongType"), Type::Int8);
		assert_eq!(lookup("IntegerType"), Type::VarInt);
		assert_eq!(lookup("CounterColumnType"), Type::Int8);
		assert_eq!(lookup("TimeUUIDType"), Type::Uuid);
	}

	#[test]
	fn test_lookup_unknown_degrades() {
		let _ = tracing_subscriber::fmt().with_test_writer().try_init();
		assert_eq!(lookup("org.example.CustomType"), Type::Other);
	}

	#[test]
	fn test_decompose_composite() {
		let parts = decompose(
			"org.apache.cassandra.db.marshal.CompositeType(org.apache.cassandra.db.marshal.LongType,org.apache.cassandra.db.marshal.UTF8Type)",
		);
		assert_eq!(parts.len(), 2);
		assert_eq!(lookup(parts[0]), Type::Int8);
		assert_eq!(lookup(parts[1]), Type::Utf8);
	}

	#[test]
	fn test_decompose_unqualified_composite() {
		let parts = decompose("CompositeType(LongType,UTF8Type)");
		assert_eq!(parts, vec!["LongType", "UTF8Type"]);
	}

	#[test]
	fn test_decompose_plain() {
		assert_eq!(
			decompose("org.apache.cassandra.db.marshal.LongType"),
			vec!["org.apache.cassandra.db.marshal.LongType"]
		);
	}

	#[test]
	fn test_parse_aliases() {
		assert_eq!(
			parse_aliases("[\"user_id\",\"tenant\"]"),
			vec!["user_id".to_string(), "tenant".to_string()]
		);
		assert_eq!(parse_aliases("[]"), Vec::<String>::new());
	}

	#[test]
	fn test_zip_excess_alias_gets_other() {
		let aliases = vec!["a".to_string(), "b".to_string()];
		let zipped = zip_aliases(&aliases, &["LongType"]);
		assert_eq!(zipped[0], ("a".to_string(), Type::Int8));
		assert_eq!(zipped[1], ("b".to_string(), Type::Other));
	}
}
