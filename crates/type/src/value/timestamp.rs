// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{Date, Time};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A point in time, stored as milliseconds since the Unix epoch, UTC.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
	pub fn from_epoch_millis(millis: i64) -> Self {
		Timestamp(millis)
	}

	pub fn epoch_millis(&self) -> i64 {
		self.0
	}

	/// The calendar date this instant falls on, in UTC.
	pub fn date_part(&self) -> Date {
		Date::from_days_since_epoch(self.0.div_euclid(MILLIS_PER_DAY) as i32)
	}

	/// The time of day of this instant, in UTC.
	pub fn time_part(&self) -> Time {
		Time::from_epoch_millis(self.0)
	}
}

impl From<i64> for Timestamp {
	fn from(millis: i64) -> Self {
		Timestamp(millis)
	}
}

impl Display for Timestamp {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}T{}Z", self.date_part(), self.time_part())
	}
}
