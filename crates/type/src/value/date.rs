// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A calendar date, stored as days since the Unix epoch (1970-01-01).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Date(i32);

impl Date {
	pub fn from_days_since_epoch(days: i32) -> Self {
		Date(days)
	}

	/// Builds a date from a proleptic Gregorian year, month and day.
	/// Returns `None` when the components do not name a real date.
	pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
		if !(1..=12).contains(&month) {
			return None;
		}
		if day < 1 || day > days_in_month(year, month) {
			return None;
		}
		Some(Date(days_from_civil(year, month, day)))
	}

	pub fn days_since_epoch(&self) -> i32 {
		self.0
	}

	pub fn year(&self) -> i32 {
		civil_from_days(self.0).0
	}

	pub fn month(&self) -> u32 {
		civil_from_days(self.0).1
	}

	pub fn day(&self) -> u32 {
		civil_from_days(self.0).2
	}
}

impl From<i32> for Date {
	fn from(days: i32) -> Self {
		Date(days)
	}
}

impl Display for Date {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let (year, month, day) = civil_from_days(self.0);
		write!(f, "{:04}-{:02}-{:02}", year, month, day)
	}
}

fn is_leap_year(year: i32) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 => {
			if is_leap_year(year) {
				29
			} else {
				28
			}
		}
		_ => 0,
	}
}

// Howard Hinnant's days_from_civil algorithm.
fn days_from_civil(year: i32, month: u32, day: u32) -> i32 {
	let y = if month <= 2 { year - 1 } else { year };
	let era = if y >= 0 { y } else { y - 399 } / 400;
	let yoe = (y - era * 400) as u32;
	let m = month as i32;
	let doy = ((153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5) as u32 + day - 1;
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
	era * 146097 + doe as i32 - 719468
}

// Howard Hinnant's civil_from_days algorithm.
fn civil_from_days(days: i32) -> (i32, u32, u32) {
	let z = days + 719468;
	let era = if z >= 0 { z } else { z - 146096 } / 146097;
	let doe = (z - era * 146097) as u32;
	let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365;
	let y = yoe as i32 + era * 400;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
	let mp = (5 * doy + 2) / 153;
	let day = doy - (153 * mp + 2) / 5 + 1;
	let month = if mp < 10 { mp + 3 } else { mp - 9 };
	(if month <= 2 { y + 1 } else { y }, month, day)
}
