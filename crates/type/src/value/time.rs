// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// A time of day, stored as milliseconds since midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Time(u32);

impl Time {
	/// Builds a time of day from milliseconds since midnight. Returns
	/// `None` when the value does not fit in a day.
	pub fn from_millis_of_day(millis: u32) -> Option<Self> {
		if i64::from(millis) >= MILLIS_PER_DAY {
			return None;
		}
		Some(Time(millis))
	}

	pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
		if hour > 23 || min > 59 || sec > 59 {
			return None;
		}
		Some(Time((hour * 3600 + min * 60 + sec) * 1000))
	}

	/// Wraps any epoch-based millisecond count into a time of day, in
	/// UTC. Values before the epoch wrap from the end of the day.
	pub fn from_epoch_millis(millis: i64) -> Self {
		Time(millis.rem_euclid(MILLIS_PER_DAY) as u32)
	}

	pub fn millis_of_day(&self) -> u32 {
		self.0
	}

	pub fn hour(&self) -> u32 {
		self.0 / 3_600_000
	}

	pub fn minute(&self) -> u32 {
		self.0 / 60_000 % 60
	}

	pub fn second(&self) -> u32 {
		self.0 / 1000 % 60
	}

	pub fn millisecond(&self) -> u32 {
		self.0 % 1000
	}
}

impl Display for Time {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())?;
		if self.millisecond() != 0 {
			write!(f, ".{:03}", self.millisecond())?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_midnight() {
		let time = Time::from_millis_of_day(0).unwrap();
		assert_eq!(time.to_string(), "00:00:00");
	}

	#[test]
	fn test_from_hms() {
		let time = Time::from_hms(13, 45, 9).unwrap();
		assert_eq!(time.to_string(), "13:45:09");
		assert!(Time::from_hms(24, 0, 0).is_none());
	}

	#[test]
	fn test_from_epoch_millis_wraps() {
		// 1970-01-02 00:00:01.500 UTC
		let time = Time::from_epoch_millis(86_401_500);
		assert_eq!(time.to_string(), "00:00:01.500");
	}

	#[test]
	fn test_from_epoch_millis_before_epoch() {
		let time = Time::from_epoch_millis(-1000);
		assert_eq!(time.to_string(), "23:59:59");
	}
}
