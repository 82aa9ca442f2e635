#![deny(missing_docs)]
#![deny(warnings)]

//! # DynamoDB Paginate
//!
//! Thin wrappers around the Amazon DynamoDB client, with helpers for walking cursor chains.
//!
//! ## Overview
//!
//! [`DynamoDb`] holds an already initialized client and offers:
//! - Pass-through `GetItem`, `PutItem`, `UpdateItem`, `DeleteItem`, `Query` and `Scan` calls
//! - `get_one`, which turns a missing item into [`Error::NotFound`]
//! - `update_if_exists_or_fail`, which refuses to update an item that does not exist
//! - `scan_all` / `query_all`, which follow `last_evaluated_key` until the last page
//! - `get_query_count`, a single count-only query
//! - `query_with_pagination`, a skip/limit window fetched concurrently with the total count
//!
//! Requests and responses are the SDK's own input and output types; nothing is rewritten on
//! the way through.
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_sdk_dynamodb::{operation::query::QueryInput, types::AttributeValue};
//! use dynamodb_paginate::{DynamoDb, config::ClientConfig, read::paginate::PaginationOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dynamo = DynamoDb::connect(&ClientConfig::from_env()).await?;
//! let options = PaginationOptions {
//!     query: QueryInput::builder()
//!         .table_name("users")
//!         .key_condition_expression("#pk = :pk")
//!         .expression_attribute_names("#pk", "primaryKey")
//!         .expression_attribute_values(":pk", AttributeValue::S("team#1".to_string()))
//!         .build()?,
//!     skip: 20,
//!     limit: 40,
//! };
//! // at most 20 items: the 21st to 40th match, plus the total number of matches
//! let page = dynamo.query_with_pagination(options).await?;
//! println!("{} items, {} matches", page.items.len(), page.count);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@client`] - The client abstraction and the [`DynamoDb`] wrapper
//! - [`mod@common`] - Item aliases and serde conversions
//! - [`mod@config`] - Client construction parameters
//! - [`mod@error`] - Error type of the composite operations
//! - [`mod@read`] - Read operations (GetItem, Query, Scan, pagination)
//! - [`mod@write`] - Write operations (PutItem, UpdateItem, DeleteItem)
//!
//! ## Features
//!
//! - `tracing`: spans around the composite operations and a debug event per fetched page
//! - `cli`: the `ddb-demo` binary

/// The client abstraction and the [`DynamoDb`] wrapper.
pub mod client;

/// Item aliases and serde conversions.
pub mod common;

/// Client construction parameters.
pub mod config;

/// Error type of the composite operations.
pub mod error;

/// Read operations for retrieving data from DynamoDB tables.
pub mod read;

/// Write operations for modifying data in DynamoDB tables.
pub mod write;

#[cfg(test)]
mod testing;

pub use client::{DynamoClient, DynamoDb};
pub use error::{Error, Result};
