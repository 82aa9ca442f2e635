//! Read operations for retrieving data from DynamoDB tables.
//!
//! This module provides operations for reading data from DynamoDB:
//! - Getting individual items by primary key, with or without a not-found error
//! - Querying and scanning single pages or whole cursor chains
//! - Counting query matches
//! - Querying a skip/limit window together with the total match count

/// Builder and page loop macros shared by read operations.
pub mod common;

/// Get item operations.
pub mod get_item;

/// Windowed query with a concurrent total count.
pub mod paginate;

/// Query operations.
pub mod query;

/// Scan operations.
pub mod scan;
