//! Scripted in-memory client for unit tests.

use crate::{client, common};

use async_trait::async_trait;
use aws_sdk_dynamodb::{
    error::SdkError,
    operation::{
        delete_item::{DeleteItemError, DeleteItemInput, DeleteItemOutput},
        get_item::{GetItemError, GetItemInput, GetItemOutput},
        put_item::{PutItemError, PutItemInput, PutItemOutput},
        query::{QueryError, QueryInput, QueryOutput},
        scan::{ScanError, ScanInput, ScanOutput},
        update_item::{UpdateItemError, UpdateItemInput, UpdateItemOutput},
    },
    types,
};
use std::{collections, ops, sync};

type Script<O, E> = sync::Mutex<collections::VecDeque<Result<O, SdkError<E>>>>;

/// A request received by [`FakeClient`].
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Request {
    GetItem(GetItemInput),
    PutItem(PutItemInput),
    UpdateItem(UpdateItemInput),
    DeleteItem(DeleteItemInput),
    Query(QueryInput),
    Scan(ScanInput),
}

/// Client answering from per-operation scripts and recording every request.
///
/// Count-only queries (`select = Count`) are answered from their own script so the two halves
/// of a paginated query can be scripted independently. An exhausted script answers with a
/// construction failure. A stalled client records queries and then never answers them.
#[derive(Debug, Default)]
pub(crate) struct FakeClient {
    count: Script<QueryOutput, QueryError>,
    get_item: Script<GetItemOutput, GetItemError>,
    query: Script<QueryOutput, QueryError>,
    requests: sync::Mutex<Vec<Request>>,
    scan: Script<ScanOutput, ScanError>,
    stall_queries: bool,
    update_item: Script<UpdateItemOutput, UpdateItemError>,
}

impl FakeClient {
    pub(crate) fn with_count(mut self, output: Result<QueryOutput, SdkError<QueryError>>) -> Self {
        self.count.get_mut().unwrap().push_back(output);
        self
    }

    pub(crate) fn with_get_item(
        mut self,
        output: Result<GetItemOutput, SdkError<GetItemError>>,
    ) -> Self {
        self.get_item.get_mut().unwrap().push_back(output);
        self
    }

    pub(crate) fn with_query(mut self, output: Result<QueryOutput, SdkError<QueryError>>) -> Self {
        self.query.get_mut().unwrap().push_back(output);
        self
    }

    pub(crate) fn with_scan(mut self, output: Result<ScanOutput, SdkError<ScanError>>) -> Self {
        self.scan.get_mut().unwrap().push_back(output);
        self
    }

    pub(crate) fn with_stalled_queries(mut self) -> Self {
        self.stall_queries = true;
        self
    }

    pub(crate) fn with_update_item(
        mut self,
        output: Result<UpdateItemOutput, SdkError<UpdateItemError>>,
    ) -> Self {
        self.update_item.get_mut().unwrap().push_back(output);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// Page queries sent so far, count-only queries excluded.
    pub(crate) fn page_queries(&self) -> Vec<QueryInput> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                Request::Query(input) if !is_count(&input) => Some(input),
                _ => None,
            })
            .collect()
    }

    /// Count-only queries sent so far.
    pub(crate) fn count_queries(&self) -> Vec<QueryInput> {
        self.requests()
            .into_iter()
            .filter_map(|request| match request {
                Request::Query(input) if is_count(&input) => Some(input),
                _ => None,
            })
            .collect()
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

fn is_count(input: &QueryInput) -> bool {
    input.select == Some(types::Select::Count)
}

fn next<O, E>(script: &Script<O, E>) -> Result<O, SdkError<E>> {
    script
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(failure("script exhausted")))
}

#[async_trait]
impl client::DynamoClient for FakeClient {
    async fn get_item(
        &self,
        input: GetItemInput,
    ) -> Result<GetItemOutput, SdkError<GetItemError>> {
        self.record(Request::GetItem(input));
        next(&self.get_item)
    }

    async fn put_item(
        &self,
        input: PutItemInput,
    ) -> Result<PutItemOutput, SdkError<PutItemError>> {
        self.record(Request::PutItem(input));
        Ok(PutItemOutput::builder().build())
    }

    async fn update_item(
        &self,
        input: UpdateItemInput,
    ) -> Result<UpdateItemOutput, SdkError<UpdateItemError>> {
        self.record(Request::UpdateItem(input));
        next(&self.update_item)
    }

    async fn delete_item(
        &self,
        input: DeleteItemInput,
    ) -> Result<DeleteItemOutput, SdkError<DeleteItemError>> {
        self.record(Request::DeleteItem(input));
        Ok(DeleteItemOutput::builder().build())
    }

    async fn query(&self, input: QueryInput) -> Result<QueryOutput, SdkError<QueryError>> {
        let script = if is_count(&input) {
            &self.count
        } else {
            &self.query
        };
        self.record(Request::Query(input));
        if self.stall_queries {
            std::future::pending::<()>().await;
        }
        next(script)
    }

    async fn scan(&self, input: ScanInput) -> Result<ScanOutput, SdkError<ScanError>> {
        self.record(Request::Scan(input));
        next(&self.scan)
    }
}

/// An SDK error that never reached the network.
pub(crate) fn failure<E>(message: &'static str) -> SdkError<E> {
    SdkError::construction_failure(message)
}

/// Item `{"id": N}`.
pub(crate) fn item(id: usize) -> common::Item {
    collections::HashMap::from([("id".to_string(), types::AttributeValue::N(id.to_string()))])
}

pub(crate) fn items(ids: ops::Range<usize>) -> Vec<common::Item> {
    ids.map(item).collect()
}

/// Query page holding `ids`, with a cursor when `more` is set.
pub(crate) fn query_page(ids: ops::Range<usize>, more: bool) -> QueryOutput {
    let cursor = more.then(|| item(ids.end.saturating_sub(1)));
    let count = ids.len() as i32;
    QueryOutput::builder()
        .set_items(Some(items(ids)))
        .count(count)
        .scanned_count(count)
        .set_last_evaluated_key(cursor)
        .build()
}

/// Scan page holding `ids`, with a cursor when `more` is set.
pub(crate) fn scan_page(ids: ops::Range<usize>, more: bool) -> ScanOutput {
    let cursor = more.then(|| item(ids.end.saturating_sub(1)));
    let count = ids.len() as i32;
    ScanOutput::builder()
        .set_items(Some(items(ids)))
        .count(count)
        .scanned_count(count)
        .set_last_evaluated_key(cursor)
        .build()
}

/// Response to a count-only query.
pub(crate) fn count_page(count: i32) -> QueryOutput {
    QueryOutput::builder()
        .count(count)
        .scanned_count(count)
        .build()
}

pub(crate) fn query_input(table_name: &str) -> QueryInput {
    QueryInput::builder()
        .table_name(table_name)
        .key_condition_expression("#pk = :pk")
        .expression_attribute_names("#pk", "primaryKey")
        .expression_attribute_values(":pk", types::AttributeValue::S("a".to_string()))
        .build()
        .unwrap()
}
