// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod coerce;
pub mod error;
pub mod value;

pub use error::{Error, diagnostic::Diagnostic};
pub use value::{
	Blob, Date, Decimal, OrderedF32, OrderedF64, Time, Timestamp, Type,
	Value, VarInt,
};

pub type Result<T> = std::result::Result<T, Error>;
