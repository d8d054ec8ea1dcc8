// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use std::fmt::{Display, Formatter, Write};

use serde::{Deserialize, Serialize};

/// An owned byte sequence. No encoding is assumed; display renders the
/// bytes as lowercase hex with a `0x` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Blob(Vec<u8>);

impl Blob {
	pub fn new(bytes: Vec<u8>) -> Self {
		Blob(bytes)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}
}

impl From<Vec<u8>> for Blob {
	fn from(bytes: Vec<u8>) -> Self {
		Blob(bytes)
	}
}

impl From<&[u8]> for Blob {
	fn from(bytes: &[u8]) -> Self {
		Blob(bytes.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Display for Blob {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("0x")?;
		for byte in &self.0 {
			write!(f, "{:02x}", byte)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_hex() {
		let blob = Blob::from(vec![0xde, 0xad, 0x01]);
		assert_eq!(blob.to_string(), "0xdead01");
	}

	#[test]
	fn test_display_empty() {
		assert_eq!(Blob::new(vec![]).to_string(), "0x");
	}
}
