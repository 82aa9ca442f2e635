//! Write operations for modifying data in DynamoDB tables.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new items or replacing existing ones
//! - Updating items, optionally only when they already exist
//! - Deleting items by primary key

/// Builder macros shared by write operations.
pub mod common;

/// Delete item operation.
pub mod delete_item;

/// Put item operation.
pub mod put_item;

/// Update item operations.
pub mod update_item;
