// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// An 8-byte float that is guaranteed not to be NaN, which makes it
/// totally ordered and hashable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OrderedF64(f64);

impl OrderedF64 {
	pub fn value(&self) -> f64 {
		self.0
	}
}

impl TryFrom<f64> for OrderedF64 {
	type Error = ();

	fn try_from(value: f64) -> Result<Self, Self::Error> {
		if value.is_nan() {
			return Err(());
		}
		Ok(OrderedF64(value))
	}
}

impl Deref for OrderedF64 {
	type Target = f64;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for OrderedF64 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF64 {}

impl PartialOrd for OrderedF64 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF64 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF64 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF64 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF64::try_from(f64::NAN).is_err());
	}

	#[test]
	fn test_value_round_trips() {
		let v = OrderedF64::try_from(3.25).unwrap();
		assert_eq!(v.value(), 3.25);
	}
}
