// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! Pure conversion rules between stored values and requested relational
//! types.
//!
//! The scalar readers (`to_bool`, `to_i32`, ...) map an absent value to the
//! type's zero value, mirroring how primitive getters behave in relational
//! client APIs. The object readers (`to_text`, `to_date`, ...) map an absent
//! value to `None`. Every defined conversion is listed explicitly; an
//! unlisted (source, target) pair fails rather than guessing.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::{
	Result, error,
	error::diagnostic::coercion::{invalid_text, not_boolean_text, unsupported_coercion},
	value::{Blob, Date, Decimal, Time, Timestamp, Type, Value, VarInt},
};

pub fn to_bool(value: &Value) -> Result<bool> {
	match value {
		Value::Undefined => Ok(false),
		Value::Bool(v) => Ok(*v),
		Value::Utf8(text) => {
			if text.eq_ignore_ascii_case("true") {
				Ok(true)
			} else if text.eq_ignore_ascii_case("false") {
				Ok(false)
			} else {
				Err(error!(not_boolean_text(text)))
			}
		}
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Bool))),
	}
}

pub fn to_i8(value: &Value) -> Result<i8> {
	match value {
		Value::Undefined => Ok(0),
		Value::Int1(v) => Ok(*v),
		Value::Int4(v) => Ok(*v as i8),
		Value::Int8(v) => Ok(*v as i8),
		Value::Utf8(text) => text
			.parse::<i8>()
			.map_err(|_| error!(invalid_text(text, Type::Int1))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Int1))),
	}
}

pub fn to_i16(value: &Value) -> Result<i16> {
	match value {
		Value::Undefined => Ok(0),
		Value::Int2(v) => Ok(*v),
		Value::Int4(v) => Ok(*v as i16),
		Value::Int8(v) => Ok(*v as i16),
		Value::Utf8(text) => text
			.parse::<i16>()
			.map_err(|_| error!(invalid_text(text, Type::Int2))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Int2))),
	}
}

pub fn to_i32(value: &Value) -> Result<i32> {
	match value {
		Value::Undefined => Ok(0),
		Value::Int4(v) => Ok(*v),
		Value::Int8(v) => Ok(*v as i32),
		Value::Utf8(text) => text
			.parse::<i32>()
			.map_err(|_| error!(invalid_text(text, Type::Int4))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Int4))),
	}
}

pub fn to_i64(value: &Value) -> Result<i64> {
	match value {
		Value::Undefined => Ok(0),
		Value::Int4(v) => Ok(i64::from(*v)),
		Value::Int8(v) => Ok(*v),
		Value::Utf8(text) => text
			.parse::<i64>()
			.map_err(|_| error!(invalid_text(text, Type::Int8))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Int8))),
	}
}

pub fn to_f32(value: &Value) -> Result<f32> {
	match value {
		Value::Undefined => Ok(0.0),
		Value::Float4(v) => Ok(v.value()),
		Value::Float8(v) => Ok(v.value() as f32),
		Value::Int4(v) => Ok(*v as f32),
		Value::Int8(v) => Ok(*v as f32),
		// NaN has no ordered float representation, so it does not parse
		Value::Utf8(text) => match text.parse::<f32>() {
			Ok(parsed) if !parsed.is_nan() => Ok(parsed),
			_ => Err(error!(invalid_text(text, Type::Float4))),
		},
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Float4))),
	}
}

pub fn to_f64(value: &Value) -> Result<f64> {
	match value {
		Value::Undefined => Ok(0.0),
		Value::Float4(v) => Ok(f64::from(v.value())),
		Value::Float8(v) => Ok(v.value()),
		Value::Int4(v) => Ok(f64::from(*v)),
		Value::Int8(v) => Ok(*v as f64),
		Value::Utf8(text) => match text.parse::<f64>() {
			Ok(parsed) if !parsed.is_nan() => Ok(parsed),
			_ => Err(error!(invalid_text(text, Type::Float8))),
		},
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Float8))),
	}
}

/// Every defined value has a textual rendering, so this never fails.
pub fn to_text(value: &Value) -> Option<String> {
	match value {
		Value::Undefined => None,
		defined => Some(defined.to_string()),
	}
}

pub fn to_blob(value: &Value) -> Result<Option<Blob>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Blob(v) => Ok(Some(v.clone())),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Blob))),
	}
}

pub fn to_decimal(value: &Value) -> Result<Option<Decimal>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Decimal(v) => Ok(Some(v.clone())),
		Value::Int4(v) => Ok(Some(Decimal::new(BigDecimal::from(*v)))),
		Value::Int8(v) => Ok(Some(Decimal::new(BigDecimal::from(*v)))),
		Value::Float4(v) => BigDecimal::from_f32(v.value())
			.map(|d| Some(Decimal::new(d)))
			.ok_or_else(|| error!(invalid_text(&v.to_string(), Type::Decimal))),
		Value::Float8(v) => BigDecimal::from_f64(v.value())
			.map(|d| Some(Decimal::new(d)))
			.ok_or_else(|| error!(invalid_text(&v.to_string(), Type::Decimal))),
		Value::Utf8(text) => Decimal::from_str(text)
			.map(Some)
			.map_err(|_| error!(invalid_text(text, Type::Decimal))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Decimal))),
	}
}

pub fn to_varint(value: &Value) -> Result<Option<VarInt>> {
	match value {
		Value::Undefined => Ok(None),
		Value::VarInt(v) => Ok(Some(v.clone())),
		Value::Int4(v) => Ok(Some(VarInt::new(BigInt::from(*v)))),
		Value::Int8(v) => Ok(Some(VarInt::new(BigInt::from(*v)))),
		Value::Utf8(text) => VarInt::from_str(text)
			.map(Some)
			.map_err(|_| error!(invalid_text(text, Type::VarInt))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::VarInt))),
	}
}

pub fn to_date(value: &Value) -> Result<Option<Date>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Date(v) => Ok(Some(*v)),
		Value::Timestamp(v) => Ok(Some(v.date_part())),
		Value::Int8(v) => Ok(Some(Timestamp::from_epoch_millis(*v).date_part())),
		Value::Utf8(text) => parse_date(text)
			.map(Some)
			.ok_or_else(|| error!(invalid_text(text, Type::Date))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Date))),
	}
}

pub fn to_time(value: &Value) -> Result<Option<Time>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Time(v) => Ok(Some(*v)),
		Value::Timestamp(v) => Ok(Some(v.time_part())),
		Value::Int8(v) => Ok(Some(Time::from_epoch_millis(*v))),
		Value::Utf8(text) => parse_time(text)
			.map(Some)
			.ok_or_else(|| error!(invalid_text(text, Type::Time))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Time))),
	}
}

pub fn to_timestamp(value: &Value) -> Result<Option<Timestamp>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Timestamp(v) => Ok(Some(*v)),
		Value::Int8(v) => Ok(Some(Timestamp::from_epoch_millis(*v))),
		Value::Utf8(text) => parse_timestamp(text)
			.map(Some)
			.ok_or_else(|| error!(invalid_text(text, Type::Timestamp))),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Timestamp))),
	}
}

pub fn to_uuid(value: &Value) -> Result<Option<uuid::Uuid>> {
	match value {
		Value::Undefined => Ok(None),
		Value::Uuid(v) => Ok(Some(*v)),
		_ => Err(error!(unsupported_coercion(value.get_type(), Type::Uuid))),
	}
}

/// Converts a value to the target relational type, re-wrapping it as a
/// [`Value`]. The dispatch table is closed: only the pairs spelled out in
/// the scalar and object readers above convert; everything else is a
/// coercion failure naming both types.
pub fn coerce(value: &Value, target: Type) -> Result<Value> {
	match target {
		Type::Bool => to_bool(value).map(Value::Bool),
		Type::Int1 => to_i8(value).map(Value::Int1),
		Type::Int2 => to_i16(value).map(Value::Int2),
		Type::Int4 => to_i32(value).map(Value::Int4),
		Type::Int8 => to_i64(value).map(Value::Int8),
		Type::Float4 => to_f32(value).map(Value::float4),
		Type::Float8 => to_f64(value).map(Value::float8),
		Type::Utf8 => Ok(to_text(value).map(Value::Utf8).unwrap_or(Value::Undefined)),
		Type::Blob => Ok(to_blob(value)?.map(Value::Blob).unwrap_or(Value::Undefined)),
		Type::Decimal => {
			Ok(to_decimal(value)?.map(Value::Decimal).unwrap_or(Value::Undefined))
		}
		Type::VarInt => Ok(to_varint(value)?.map(Value::VarInt).unwrap_or(Value::Undefined)),
		Type::Date => Ok(to_date(value)?.map(Value::Date).unwrap_or(Value::Undefined)),
		Type::Time => Ok(to_time(value)?.map(Value::Time).unwrap_or(Value::Undefined)),
		Type::Timestamp => {
			Ok(to_timestamp(value)?.map(Value::Timestamp).unwrap_or(Value::Undefined))
		}
		Type::Uuid => Ok(to_uuid(value)?.map(Value::Uuid).unwrap_or(Value::Undefined)),
		Type::Other | Type::Undefined => {
			Err(error!(unsupported_coercion(value.get_type(), target)))
		}
	}
}

// "YYYY-MM-DD"
fn parse_date(text: &str) -> Option<Date> {
	let mut parts = text.splitn(3, '-');
	let year = parts.next()?.parse::<i32>().ok()?;
	let month = parts.next()?.parse::<u32>().ok()?;
	let day = parts.next()?.parse::<u32>().ok()?;
	Date::from_ymd(year, month, day)
}

// "HH:MM:SS" with an optional ".mmm" fraction
fn parse_time(text: &str) -> Option<Time> {
	let (clock, fraction) = match text.split_once('.') {
		Some((clock, fraction)) => (clock, Some(fraction)),
		None => (text, None),
	};
	let mut parts = clock.splitn(3, ':');
	let hour = parts.next()?.parse::<u32>().ok()?;
	let min = parts.next()?.parse::<u32>().ok()?;
	let sec = parts.next()?.parse::<u32>().ok()?;
	let base = Time::from_hms(hour, min, sec)?;
	let millis = match fraction {
		Some(fraction) if fraction.len() <= 3 => {
			let parsed = fraction.parse::<u32>().ok()?;
			parsed * 10u32.pow(3 - fraction.len() as u32)
		}
		Some(_) => return None,
		None => 0,
	};
	Time::from_millis_of_day(base.millis_of_day() + millis)
}

// "YYYY-MM-DDTHH:MM:SS[.mmm][Z]", also accepting a space separator
fn parse_timestamp(text: &str) -> Option<Timestamp> {
	let text = text.strip_suffix('Z').unwrap_or(text);
	let (date_text, time_text) =
		text.split_once('T').or_else(|| text.split_once(' '))?;
	let date = parse_date(date_text)?;
	let time = parse_time(time_text)?;
	Some(Timestamp::from_epoch_millis(
		i64::from(date.days_since_epoch()) * 86_400_000 + i64::from(time.millis_of_day()),
	))
}
