// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod blob;
mod date;
mod decimal;
mod ordered_f32;
mod ordered_f64;
mod time;
mod timestamp;
mod r#type;
mod varint;

pub use blob::Blob;
pub use date::Date;
pub use decimal::Decimal;
pub use ordered_f32::OrderedF32;
pub use ordered_f64::OrderedF64;
pub use time::Time;
pub use timestamp::Timestamp;
pub use r#type::Type;
pub use varint::VarInt;

/// A native value as delivered by the store, represented as a Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Bool(bool),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A UTF-8 encoded text
	Utf8(String),
	/// A byte sequence (no validation)
	Blob(Blob),
	/// An arbitrary-precision decimal
	Decimal(Decimal),
	/// An arbitrary-precision signed integer
	VarInt(VarInt),
	/// A date value (days since Unix epoch)
	Date(Date),
	/// A time of day value (milliseconds since midnight)
	Time(Time),
	/// A point in time (milliseconds since Unix epoch)
	Timestamp(Timestamp),
	/// A UUID, type 1 or type 4
	Uuid(uuid::Uuid),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Bool(v.into())
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into())
			.map(Value::Float4)
			.unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into())
			.map(Value::Float8)
			.unwrap_or(Value::Undefined)
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn blob(v: impl Into<Blob>) -> Self {
		Value::Blob(v.into())
	}

	pub fn decimal(v: impl Into<Decimal>) -> Self {
		Value::Decimal(v.into())
	}

	pub fn varint(v: impl Into<VarInt>) -> Self {
		Value::VarInt(v.into())
	}

	pub fn date(v: impl Into<Date>) -> Self {
		Value::Date(v.into())
	}

	pub fn time(v: impl Into<Time>) -> Self {
		Value::Time(v.into())
	}

	pub fn timestamp(v: impl Into<Timestamp>) -> Self {
		Value::Timestamp(v.into())
	}

	pub fn uuid(v: impl Into<uuid::Uuid>) -> Self {
		Value::Uuid(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Bool(_) => Type::Bool,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Utf8(_) => Type::Utf8,
			Value::Blob(_) => Type::Blob,
			Value::Decimal(_) => Type::Decimal,
			Value::VarInt(_) => Type::VarInt,
			Value::Date(_) => Type::Date,
			Value::Time(_) => Type::Time,
			Value::Timestamp(_) => Type::Timestamp,
			Value::Uuid(_) => Type::Uuid,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Undefined => f.write_str("undefined"),
			Value::Bool(true) => f.write_str("true"),
			Value::Bool(false) => f.write_str("false"),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Blob(value) => Display::fmt(value, f),
			Value::Decimal(value) => Display::fmt(value, f),
			Value::VarInt(value) => Display::fmt(value, f),
			Value::Date(value) => Display::fmt(value, f),
			Value::Time(value) => Display::fmt(value, f),
			Value::Timestamp(value) => Display::fmt(value, f),
			Value::Uuid(value) => Display::fmt(value, f),
		}
	}
}
