// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All relational types a caller can request from a cursor.
///
/// `Other` is the degraded fallback used when a catalog type declaration
/// cannot be matched against any known type; `Undefined` is the type of an
/// absent value.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Bool,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A UTF-8 encoded text
	Utf8,
	/// A byte sequence (no validation)
	Blob,
	/// An arbitrary-precision decimal
	Decimal,
	/// An arbitrary-precision signed integer
	VarInt,
	/// A date value (days since Unix epoch)
	Date,
	/// A time of day value (milliseconds since midnight)
	Time,
	/// A point in time (milliseconds since Unix epoch)
	Timestamp,
	/// A UUID, type 1 or type 4
	Uuid,
	/// An unrecognized store-side type
	Other,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		matches!(
			self,
			Type::Int1 | Type::Int2
				| Type::Int4 | Type::Int8
				| Type::Float4 | Type::Float8
		)
	}

	pub fn is_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_utf8(&self) -> bool {
		matches!(self, Type::Utf8)
	}

	pub fn is_temporal(&self) -> bool {
		matches!(self, Type::Date | Type::Time | Type::Timestamp)
	}

	/// True for the arbitrary-precision numeric types, which report a
	/// decimal radix in column metadata.
	pub fn is_arbitrary_precision(&self) -> bool {
		matches!(self, Type::Decimal | Type::VarInt)
	}

	/// The conventional relational type-code integer reported in
	/// DATA_TYPE metadata columns.
	pub fn sql_code(&self) -> i32 {
		match self {
			Type::Bool => 16,
			Type::Int1 => -6,
			Type::Int2 => 5,
			Type::Int4 => 4,
			Type::Int8 => -5,
			Type::Float4 => 6,
			Type::Float8 => 8,
			Type::Utf8 => 12,
			Type::Blob => -3,
			Type::Decimal => 3,
			Type::VarInt => 2,
			Type::Date => 91,
			Type::Time => 92,
			Type::Timestamp => 93,
			Type::Uuid => 1111,
			Type::Other => 1111,
			Type::Undefined => 0,
		}
	}

	/// The conventional relational type name matching [`Type::sql_code`].
	pub fn sql_name(&self) -> &'static str {
		match self {
			Type::Bool => "BOOLEAN",
			Type::Int1 => "TINYINT",
			Type::Int2 => "SMALLINT",
			Type::Int4 => "INTEGER",
			Type::Int8 => "BIGINT",
			Type::Float4 => "FLOAT",
			Type::Float8 => "DOUBLE",
			Type::Utf8 => "VARCHAR",
			Type::Blob => "VARBINARY",
			Type::Decimal => "DECIMAL",
			Type::VarInt => "NUMERIC",
			Type::Date => "DATE",
			Type::Time => "TIME",
			Type::Timestamp => "TIMESTAMP",
			Type::Uuid => "UUID",
			Type::Other => "OTHER",
			Type::Undefined => "NULL",
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Bool => f.write_str("Bool"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Blob => f.write_str("Blob"),
			Type::Decimal => f.write_str("Decimal"),
			Type::VarInt => f.write_str("VarInt"),
			Type::Date => f.write_str("Date"),
			Type::Time => f.write_str("Time"),
			Type::Timestamp => f.write_str("Timestamp"),
			Type::Uuid => f.write_str("Uuid"),
			Type::Other => f.write_str("Other"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}
