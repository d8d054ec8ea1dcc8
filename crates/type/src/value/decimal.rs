// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// An arbitrary-precision decimal number.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Decimal(BigDecimal);

impl Decimal {
	pub fn new(inner: BigDecimal) -> Self {
		Decimal(inner)
	}

	pub fn inner(&self) -> &BigDecimal {
		&self.0
	}

	/// Number of significant digits.
	pub fn precision(&self) -> u64 {
		self.0.digits()
	}

	/// Number of digits after the decimal point, zero when the scale is
	/// negative.
	pub fn scale(&self) -> u32 {
		let (_, scale) = self.0.as_bigint_and_exponent();
		u32::try_from(scale).unwrap_or(0)
	}
}

impl From<BigDecimal> for Decimal {
	fn from(inner: BigDecimal) -> Self {
		Decimal(inner)
	}
}

impl From<i64> for Decimal {
	fn from(value: i64) -> Self {
		Decimal(BigDecimal::from(value))
	}
}

impl FromStr for Decimal {
	type Err = bigdecimal::ParseBigDecimalError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Decimal(BigDecimal::from_str(s)?))
	}
}

impl Display for Decimal {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}
