use crate::{DynamoDb, client, error};

use aws_sdk_dynamodb::{
    error::SdkError,
    operation::{get_item, update_item},
};

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Update item operation, forwarded unchanged to the client.
    pub async fn update_item(
        &self,
        input: update_item::UpdateItemInput,
    ) -> Result<update_item::UpdateItemOutput, SdkError<update_item::UpdateItemError>> {
        self.client().update_item(input).await
    }

    /// Update the item only if it exists, failing with [`error::Error::NotFound`] otherwise.
    ///
    /// Existence is checked with a separate `GetItem` on the update's table and key before the
    /// update is sent. The two calls are not atomic: an item deleted in between is still
    /// updated (and so recreated). Use a `condition_expression` when that matters.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::{operation::update_item::UpdateItemInput, types::AttributeValue};
    /// use dynamodb_paginate::DynamoDb;
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let input = UpdateItemInput::builder()
    ///     .table_name("users")
    ///     .key("id", AttributeValue::S("1".to_string()))
    ///     .update_expression("SET #name = :name")
    ///     .expression_attribute_names("#name", "name")
    ///     .expression_attribute_values(":name", AttributeValue::S("Jane".to_string()))
    ///     .build()?;
    /// match dynamo.update_if_exists_or_fail(input).await {
    ///     Err(err) if err.is_not_found() => println!("no such user"),
    ///     other => {
    ///         other?;
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_paginate.update_if_exists_or_fail", skip_all, err)
    )]
    pub async fn update_if_exists_or_fail(
        &self,
        input: update_item::UpdateItemInput,
    ) -> error::Result<update_item::UpdateItemOutput> {
        let lookup = get_item::GetItemInput::builder()
            .set_table_name(input.table_name.clone())
            .set_key(input.key.clone())
            .build()
            .map_err(|err| error::Error::from(SdkError::<get_item::GetItemError>::construction_failure(err)))?;
        self.get_one(lookup).await?;
        let output = self.client().update_item(input).await?;
        Ok(output)
    }
}
