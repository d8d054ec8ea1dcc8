// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod cursor;
pub mod row;
pub mod schema;
pub mod table;

pub use cqlbridge_type::{Error, Result};
pub use cursor::{ColumnRef, TypedCursor};
pub use row::{RawRow, RowStream};
pub use schema::{Column, ColumnSchema};
pub use table::{SyntheticTable, TableStream};
