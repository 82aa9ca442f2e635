use crate::{DynamoDb, client};

use aws_sdk_dynamodb::{error::SdkError, operation::put_item};

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Put item operation, forwarded unchanged to the client.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::operation::put_item::PutItemInput;
    /// use dynamodb_paginate::{DynamoDb, common};
    /// use serde_json::json;
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let input = PutItemInput::builder()
    ///     .table_name("users")
    ///     .set_item(Some(common::to_key(json!({"id": "1", "name": "John"}))?))
    ///     .build()?;
    /// dynamo.put_item(input).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn put_item(
        &self,
        input: put_item::PutItemInput,
    ) -> Result<put_item::PutItemOutput, SdkError<put_item::PutItemError>> {
        self.client().put_item(input).await
    }
}
