// Copyright (c) reifydb.com 2025
// This file is licensed under the MIT, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod introspector;
pub mod session;
pub mod test_utils;
pub mod validator;

pub use cqlbridge_type::{Error, Result};
pub use introspector::{Introspector, PrimaryKeyColumn};
pub use session::{QueryCursor, Session};
