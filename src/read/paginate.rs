use crate::{DynamoDb, client, common, error};

use aws_sdk_dynamodb::operation::query;
use serde::de::DeserializeOwned;

/// Query with a client-side result window.
///
/// `limit` bounds the number of items gathered across all pages; it is unrelated to
/// `query.limit`, which only sets the server page size. `skip` is applied afterwards, to the
/// gathered items only, so a window never reaches past the first `limit` matches.
///
/// ```rust
/// use aws_sdk_dynamodb::operation::query::QueryInput;
/// use dynamodb_paginate::read::paginate::PaginationOptions;
///
/// let options = PaginationOptions {
///     query: QueryInput::builder().table_name("users").build().unwrap(),
///     skip: 10,
///     limit: 20,
/// };
/// assert_eq!(options.window_len(), 10);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationOptions {
    /// The query to run. Its `exclusive_start_key` is ignored.
    pub query: query::QueryInput,
    /// Number of gathered items to drop from the front.
    pub skip: usize,
    /// Maximum number of items to gather before `skip` is applied.
    pub limit: usize,
}

impl PaginationOptions {
    /// Upper bound on the number of items a result can hold.
    pub fn window_len(&self) -> usize {
        self.limit.saturating_sub(self.skip)
    }
}

/// Result of [`DynamoDb::query_with_pagination`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaginatedResult {
    /// Items left in the window.
    pub items: Vec<common::Item>,
    /// The requested skip.
    pub skip: usize,
    /// The requested limit.
    pub limit: usize,
    /// Total number of items matching the query server-side, regardless of skip and limit.
    pub count: usize,
}

impl PaginatedResult {
    /// Deserialize the window's items into `T`, consuming the result.
    pub fn deserialize_items<T: DeserializeOwned>(self) -> error::Result<Vec<T>> {
        let items = common::from_items(self.items)?;
        Ok(items)
    }
}

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Query a window of items together with the total match count.
    ///
    /// The page fetch and a count-only query run concurrently and both run to completion. If
    /// either fails the call fails; when both fail the error carries both failures.
    ///
    /// ```rust,no_run
    /// use aws_sdk_dynamodb::{operation::query::QueryInput, types::AttributeValue};
    /// use dynamodb_paginate::{DynamoDb, read::paginate::PaginationOptions};
    ///
    /// # async fn example(dynamo: &DynamoDb) -> Result<(), Box<dyn std::error::Error>> {
    /// let options = PaginationOptions {
    ///     query: QueryInput::builder()
    ///         .table_name("users")
    ///         .key_condition_expression("#pk = :pk")
    ///         .expression_attribute_names("#pk", "primaryKey")
    ///         .expression_attribute_values(":pk", AttributeValue::S("1".to_string()))
    ///         .build()?,
    ///     skip: 0,
    ///     limit: 3,
    /// };
    /// let page = dynamo.query_with_pagination(options).await?;
    /// println!("{} of {}", page.items.len(), page.count);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "dynamodb_paginate.query_with_pagination",
            skip_all,
            fields(skip = options.skip, limit = options.limit),
            err
        )
    )]
    pub async fn query_with_pagination(
        &self,
        options: PaginationOptions,
    ) -> error::Result<PaginatedResult> {
        let PaginationOptions { query, skip, limit } = options;
        let (fetched, counted) = tokio::join!(
            self.fetch_window(query.clone(), skip, limit),
            self.get_query_count(query),
        );
        match (fetched, counted) {
            (Ok(items), Ok(count)) => Ok(PaginatedResult {
                items,
                skip,
                limit,
                count,
            }),
            (Err(fetch_error), Ok(_)) => Err(error::Error::Querying(Box::new(fetch_error))),
            (Ok(_), Err(count_error)) => Err(error::Error::Counting(Box::new(count_error))),
            (Err(fetch_error), Err(count_error)) => Err(error::Error::Multiple(vec![
                error::Error::Querying(Box::new(fetch_error)),
                error::Error::Counting(Box::new(count_error)),
            ])),
        }
    }

    /// Gather at most `limit` items following the cursor chain, then drop the first `skip`.
    async fn fetch_window(
        &self,
        mut input: query::QueryInput,
        skip: usize,
        limit: usize,
    ) -> error::Result<Vec<common::Item>> {
        let mut items: Vec<common::Item> = Vec::new();
        let mut cursor: Option<common::Cursor> = None;
        loop {
            input.exclusive_start_key = cursor;
            let output = self.client().query(input.clone()).await?;
            let mut page = output.items.unwrap_or_default();
            page.truncate(limit.saturating_sub(items.len()));
            #[cfg(feature = "tracing")]
            tracing::debug!(
                page = page.len(),
                gathered = items.len(),
                more = output.last_evaluated_key.is_some(),
                "fetched page"
            );
            items.extend(page);
            match output.last_evaluated_key {
                Some(last_evaluated_key) if items.len() < limit => {
                    cursor = Some(last_evaluated_key)
                }
                _ => break,
            }
        }
        let skip = skip.min(items.len());
        Ok(items.split_off(skip))
    }
}
