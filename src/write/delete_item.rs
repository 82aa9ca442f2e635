use crate::{DynamoDb, client};

use aws_sdk_dynamodb::{error::SdkError, operation::delete_item};

impl<C: client::DynamoClient> DynamoDb<C> {
    /// Delete item operation, forwarded unchanged to the client.
    pub async fn delete_item(
        &self,
        input: delete_item::DeleteItemInput,
    ) -> Result<delete_item::DeleteItemOutput, SdkError<delete_item::DeleteItemError>> {
        self.client().delete_item(input).await
    }
}
