//! Walks a table with the helpers: a full scan, a paginated query and a missing-key lookup.
//!
//! Reads `TABLE_NAME`, `PARTITION_KEY` (default `primaryKey`) and `PARTITION_VALUE` from the
//! environment, plus the usual `AWS_*` variables.

use aws_sdk_dynamodb::{
    operation::{get_item::GetItemInput, query::QueryInput, scan::ScanInput},
    types::AttributeValue,
};
use dynamodb_paginate::{
    DynamoClient, DynamoDb, common, config::ClientConfig, read::paginate::PaginationOptions,
};
use std::{collections::HashMap, env, process, time::Duration};
use tracing_subscriber::EnvFilter;

const SCAN_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Ok(table_name) = env::var("TABLE_NAME") else {
        tracing::error!("TABLE_NAME is not set");
        process::exit(1);
    };
    let partition_key = env::var("PARTITION_KEY").unwrap_or_else(|_| "primaryKey".to_string());
    let partition_value = env::var("PARTITION_VALUE").unwrap_or_default();

    let config = ClientConfig::from_env();
    tracing::info!(endpoint = %config.target_display(), "connecting");
    let dynamo = match DynamoDb::connect(&config).await {
        Ok(dynamo) => dynamo,
        Err(err) => {
            tracing::error!(%err, "unable to create client");
            process::exit(1);
        }
    };

    if let Err(err) = run(&dynamo, &table_name, &partition_key, &partition_value).await {
        tracing::error!(%err, "demo failed");
        process::exit(1);
    }
}

/// Scan and lookup failures are logged and the demo moves on; a failed paginated query ends it.
async fn run<C: DynamoClient>(
    dynamo: &DynamoDb<C>,
    table_name: &str,
    partition_key: &str,
    partition_value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let scan = ScanInput::builder().table_name(table_name).build()?;
    match tokio::time::timeout(SCAN_TIMEOUT, dynamo.scan_all(scan)).await {
        Ok(Ok(items)) => {
            for item in items {
                tracing::info!(?item, "scanned");
            }
        }
        Ok(Err(err)) => tracing::error!(%err, "scan failed"),
        Err(_) => tracing::warn!(timeout = ?SCAN_TIMEOUT, "scan timed out"),
    }

    let options = PaginationOptions {
        query: QueryInput::builder()
            .table_name(table_name)
            .key_condition_expression("#pk = :pk")
            .expression_attribute_names("#pk", partition_key)
            .expression_attribute_values(":pk", AttributeValue::S(partition_value.to_string()))
            .build()?,
        skip: 0,
        limit: 3,
    };
    let page = dynamo.query_with_pagination(options).await?;
    tracing::info!(count = page.count, returned = page.items.len(), "paginated results");
    for item in &page.items {
        tracing::info!(?item, "paginated");
    }

    let key = common::to_key(HashMap::from([
        (partition_key, "no-exist"),
        ("sortKey", "no-exist"),
    ]))?;
    let lookup = GetItemInput::builder()
        .table_name(table_name)
        .set_key(Some(key))
        .build()?;
    match dynamo.get_one(lookup).await {
        Ok(item) => tracing::info!(?item, "unexpected item"),
        Err(err) if err.is_not_found() => tracing::info!("missing key reported as not found"),
        Err(err) => tracing::error!(%err, "lookup failed"),
    }
    Ok(())
}
