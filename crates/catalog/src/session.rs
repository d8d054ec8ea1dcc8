// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

use cqlbridge_cursor::{RowStream, TypedCursor};
use cqlbridge_type::Result;

/// The cursor type every catalog operation yields: typed, forward-only,
/// over a type-erased row source.
pub type QueryCursor = TypedCursor<Box<dyn RowStream>>;

/// A handle that can run a query against the cluster and return the result
/// as a cursor. The introspector owns one explicitly; there is no shared
/// or cached session.
pub trait Session {
	fn execute(&mut self, query: &str) -> Result<QueryCursor>;
}

impl<S: Session + ?Sized> Session for &mut S {
	fn execute(&mut self, query: &str) -> Result<QueryCursor> {
		(**self).execute(query)
	}
}
