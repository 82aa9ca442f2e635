//! Common types and conversions shared by read and write operations.
//!
//! Items travel through this crate as the SDK's raw attribute maps. The helpers here convert
//! typed Rust values to and from that representation with `serde_dynamo`.

use aws_sdk_dynamodb::types;
use serde::{Serialize, de::DeserializeOwned};
use serde_dynamo::{Result, from_item as attribute_map_to_value, to_item};
use std::collections;

/// A DynamoDB item: attribute name to attribute value.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Continuation token returned as `last_evaluated_key` and sent back as `exclusive_start_key`.
pub type Cursor = Item;

/// Serialize a typed primary key into an attribute map.
///
/// ```rust
/// use dynamodb_paginate::common;
/// use serde_json::json;
///
/// let key = common::to_key(json!({"primaryKey": "a", "sortKey": "b"})).unwrap();
/// assert_eq!(key.len(), 2);
/// ```
pub fn to_key<T: Serialize>(key: T) -> Result<Item> {
    to_item(key)
}

/// Deserialize a single item into a typed value.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T> {
    attribute_map_to_value(item)
}

/// Deserialize a list of items, preserving their order.
pub fn from_items<T: DeserializeOwned>(items: Vec<Item>) -> Result<Vec<T>> {
    items.into_iter().map(from_item).collect()
}
