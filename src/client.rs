use crate::{config, error};

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    Client,
    error::SdkError,
    operation::{
        delete_item::{DeleteItemError, DeleteItemInput, DeleteItemOutput},
        get_item::{GetItemError, GetItemInput, GetItemOutput},
        put_item::{PutItemError, PutItemInput, PutItemOutput},
        query::{QueryError, QueryInput, QueryOutput},
        scan::{ScanError, ScanInput, ScanOutput},
        update_item::{UpdateItemError, UpdateItemInput, UpdateItemOutput},
    },
};

/// The DynamoDB operations this crate builds on.
///
/// Implemented for [`aws_sdk_dynamodb::Client`]. Every call takes the SDK's input struct and
/// returns the SDK's output or error as-is, so any implementation can stand in for the real
/// client.
#[async_trait]
pub trait DynamoClient: Send + Sync {
    /// Send a `GetItem` request.
    async fn get_item(
        &self,
        input: GetItemInput,
    ) -> Result<GetItemOutput, SdkError<GetItemError>>;

    /// Send a `PutItem` request.
    async fn put_item(
        &self,
        input: PutItemInput,
    ) -> Result<PutItemOutput, SdkError<PutItemError>>;

    /// Send an `UpdateItem` request.
    async fn update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, SdkError<UpdateItemError>>;

    /// Send a `DeleteItem` request.
    async fn delete_item(
        &self,
        input: DeleteItemInput,
    ) -> Result<DeleteItemOutput, SdkError<DeleteItemError>>;

    /// Send a single `Query` request (one page).
    async fn query(&self, input: QueryInput) -> Result<QueryOutput, SdkError<QueryError>>;

    /// Send a single `Scan` request (one page).
    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, SdkError<ScanError>>;
}

#[async_trait]
impl DynamoClient for Client {
    async fn get_item(
        &self,
        input: GetItemInput,
    ) -> Result<GetItemOutput, SdkError<GetItemError>> {
        crate::apply_get_item_input!(self.get_item(), input)
            .send()
            .await
    }

    async fn put_item(
        &self,
        input: PutItemInput,
    ) -> Result<PutItemOutput, SdkError<PutItemError>> {
        let builder = self.put_item().set_item(input.item);
        crate::apply_write_input!(builder, input).send().await
    }

    async fn update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, SdkError<UpdateItemError>> {
        let builder = self
            .update_item()
            .set_key(input.key)
            .set_attribute_updates(input.attribute_updates)
            .set_update_expression(input.update_expression);
        crate::apply_write_input!(builder, input).send().await
    }

    async fn delete_item(
        &self,
        input: DeleteItemInput,
    ) -> Result<DeleteItemOutput, SdkError<DeleteItemError>> {
        let builder = self.delete_item().set_key(input.key);
        crate::apply_write_input!(builder, input).send().await
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, SdkError<QueryError>> {
        let builder = self
            .query()
            .set_key_conditions(input.key_conditions)
            .set_query_filter(input.query_filter)
            .set_scan_index_forward(input.scan_index_forward)
            .set_key_condition_expression(input.key_condition_expression);
        crate::apply_multiple_read_input!(builder, input)
            .send()
            .await
    }

    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, SdkError<ScanError>> {
        let builder = self
            .scan()
            .set_scan_filter(input.scan_filter)
            .set_segment(input.segment)
            .set_total_segments(input.total_segments);
        crate::apply_multiple_read_input!(builder, input)
            .send()
            .await
    }
}

/// DynamoDB wrapper holding an already initialized client.
///
/// ```rust,no_run
/// use dynamodb_paginate::{DynamoDb, config::ClientConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let dynamo = DynamoDb::connect(&ClientConfig::from_env()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct DynamoDb<C = Client> {
    client: C,
}

impl<C> DynamoDb<C> {
    /// Wrap an existing client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// The wrapped client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl DynamoDb<Client> {
    /// Build a client from the given configuration.
    ///
    /// Fails with [`error::Error::Configuration`] when no region can be resolved; the caller
    /// decides whether that ends the process.
    pub async fn connect(config: &config::ClientConfig) -> error::Result<Self> {
        let sdk_config = config.load().await;
        if sdk_config.region().is_none() {
            return Err(error::Error::Configuration(
                "no AWS region configured".to_string(),
            ));
        }
        Ok(Self::new(Client::new(&sdk_config)))
    }
}
