// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

/// An arbitrary-precision signed integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VarInt(BigInt);

impl VarInt {
	pub fn new(inner: BigInt) -> Self {
		VarInt(inner)
	}

	pub fn inner(&self) -> &BigInt {
		&self.0
	}

	/// Number of decimal digits, ignoring the sign.
	pub fn digits(&self) -> u64 {
		let (_, digits) = self.0.to_radix_le(10);
		digits.len() as u64
	}
}

impl From<BigInt> for VarInt {
	fn from(inner: BigInt) -> Self {
		VarInt(inner)
	}
}

impl From<i64> for VarInt {
	fn from(value: i64) -> Self {
		VarInt(BigInt::from(value))
	}
}

impl FromStr for VarInt {
	type Err = num_bigint::ParseBigIntError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(VarInt(BigInt::from_str(s)?))
	}
}

impl Display for VarInt {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_and_display() {
		let v = VarInt::from_str("-123456789012345678901234567890").unwrap();
		assert_eq!(v.to_string(), "-123456789012345678901234567890");
	}

	#[test]
	fn test_digits() {
		assert_eq!(VarInt::from(1000).digits(), 4);
		assert_eq!(VarInt::from(-7).digits(), 1);
	}
}
