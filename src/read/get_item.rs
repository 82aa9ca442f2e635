use crate::{DynamoDb, client, common, error};

use aws_sdk_dynamodb::{error::SdkError, operation::get_item};
use serde::de::DeserializeOwned;

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Get item operation, forwarded unchanged to the client.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::{operation::get_item::GetItemInput, types::AttributeValue};
    /// use dynamodb_paginate::DynamoDb;
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let input = GetItemInput::builder()
    ///     .table_name("users")
    ///     .key("id", AttributeValue::S("1".to_string()))
    ///     .build()?;
    /// dynamo.get_item(input).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_item(
        &self,
        input: get_item::GetItemInput,
    ) -> Result<get_item::GetItemOutput, SdkError<get_item::GetItemError>> {
        self.client().get_item(input).await
    }

    /// Get the item matching the key, or [`error::Error::NotFound`] when there is none.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_paginate.get_one", skip_all, err)
    )]
    pub async fn get_one(&self, input: get_item::GetItemInput) -> error::Result<common::Item> {
        let output = self.client().get_item(input).await?;
        output.item.ok_or(error::Error::NotFound)
    }

    /// Like [`DynamoDb::get_one`], deserializing the item into `T`.
    pub async fn get_one_as<T: DeserializeOwned>(
        &self,
        input: get_item::GetItemInput,
    ) -> error::Result<T> {
        let item = self.get_one(input).await?;
        let value = common::from_item(item)?;
        Ok(value)
    }
}
