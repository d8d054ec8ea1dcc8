// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// A 4-byte float that is guaranteed not to be NaN, which makes it
/// totally ordered and hashable.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = ();

	fn try_from(value: f32) -> Result<Self, Self::Error> {
		if value.is_nan() {
			return Err(());
		}
		Ok(OrderedF32(value))
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		Display::fmt(&self.0, f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rejects_nan() {
		assert!(OrderedF32::try_from(f32::NAN).is_err());
	}

	#[test]
	fn test_orders_totally() {
		let a = OrderedF32::try_from(-1.0).unwrap();
		let b = OrderedF32::try_from(2.5).unwrap();
		assert!(a < b);
	}
}
