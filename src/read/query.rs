use crate::{DynamoDb, client, common, error};

use aws_sdk_dynamodb::{error::SdkError, operation::query, types};

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Query operation for a single page, forwarded unchanged to the client.
    pub async fn query(
        &self,
        input: query::QueryInput,
    ) -> Result<query::QueryOutput, SdkError<query::QueryError>> {
        self.client().query(input).await
    }

    /// Query every page of the result set and return all items in arrival order.
    ///
    /// The request's own `exclusive_start_key` is replaced: the walk starts from the first page.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::{operation::query::QueryInput, types::AttributeValue};
    /// use dynamodb_paginate::DynamoDb;
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let input = QueryInput::builder()
    ///     .table_name("users")
    ///     .key_condition_expression("#pk = :pk")
    ///     .expression_attribute_names("#pk", "primaryKey")
    ///     .expression_attribute_values(":pk", AttributeValue::S("1".to_string()))
    ///     .build()?;
    /// let items = dynamo.query_all(input).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_paginate.query_all", skip_all, err)
    )]
    pub async fn query_all(&self, input: query::QueryInput) -> error::Result<Vec<common::Item>> {
        crate::fetch_all_pages!(self.client(), query, input)
    }

    /// Number of items matching the query, as reported by the server.
    ///
    /// The request is always sent as a count-only query (`Select::Count`), whatever `select`
    /// the caller set, and exactly one request is issued. A negative count from the server is
    /// reported as 0.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_paginate.get_query_count", skip_all, err)
    )]
    pub async fn get_query_count(&self, mut input: query::QueryInput) -> error::Result<usize> {
        input.select = Some(types::Select::Count);
        let output = self.client().query(input).await?;
        Ok(output.count.max(0) as usize)
    }
}
