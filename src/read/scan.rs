use crate::{DynamoDb, client, common, error};

use aws_sdk_dynamodb::{error::SdkError, operation::scan};

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Scan operation for a single page, forwarded unchanged to the client.
    pub async fn scan(
        &self,
        input: scan::ScanInput,
    ) -> Result<scan::ScanOutput, SdkError<scan::ScanError>> {
        self.client().scan(input).await
    }

    /// Scan the whole table (or segment) and return all items in arrival order.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::operation::scan::ScanInput;
    /// use dynamodb_paginate::DynamoDb;
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let input = ScanInput::builder().table_name("users").build()?;
    /// let items = dynamo.scan_all(input).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_paginate.scan_all", skip_all, err)
    )]
    pub async fn scan_all(&self, input: scan::ScanInput) -> error::Result<Vec<common::Item>> {
        crate::fetch_all_pages!(self.client(), scan, input)
    }
}
