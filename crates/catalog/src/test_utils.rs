// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

//! A scripted session so introspection is testable without a live cluster.

use std::collections::VecDeque;

use cqlbridge_cursor::SyntheticTable;
use cqlbridge_type::{Result, Type, Value};

use crate::session::{QueryCursor, Session};

struct CannedResult {
	columns: Vec<(String, Type)>,
	rows: Vec<Vec<Value>>,
}

/// Replays pre-scripted results in push order and records every executed
/// query text. Executing past the script yields an empty, zero-column
/// result, which shape-checking tests will catch.
#[derive(Default)]
pub struct FakeSession {
	results: VecDeque<CannedResult>,
	pub executed: Vec<String>,
}

impl FakeSession {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(
		&mut self,
		columns: impl IntoIterator<Item = (impl Into<String>, Type)>,
		rows: Vec<Vec<Value>>,
	) {
		self.results.push_back(CannedResult {
			columns: columns.into_iter().map(|(name, ty)| (name.into(), ty)).collect(),
			rows,
		});
	}
}

impl Session for FakeSession {
	fn execute(&mut self, query: &str) -> Result<QueryCursor> {
		self.executed.push(query.to_string());
		let canned = self.results.pop_front().unwrap_or(CannedResult {
			columns: Vec::new(),
			rows: Vec::new(),
		});
		let mut table = SyntheticTable::new(canned.columns);
		for row in canned.rows {
			table.append(row)?;
		}
		Ok(table.into_boxed_cursor())
	}
}
