use aws_sdk_dynamodb::{error, operation};

/// Result type alias for the composite operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors returned by the composite operations.
///
/// Pass-through operations return the SDK error untouched; only the helpers built on top of
/// them (`get_one`, `scan_all`, `query_with_pagination`, ...) report this type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The key did not match any item.
    #[error("item not found")]
    NotFound,
    /// A `GetItem` call failed.
    #[error(transparent)]
    GetItem(Box<error::SdkError<operation::get_item::GetItemError>>),
    /// An `UpdateItem` call failed.
    #[error(transparent)]
    UpdateItem(Box<error::SdkError<operation::update_item::UpdateItemError>>),
    /// A `Query` call failed.
    #[error(transparent)]
    Query(Box<error::SdkError<operation::query::QueryError>>),
    /// A `Scan` call failed.
    #[error(transparent)]
    Scan(Box<error::SdkError<operation::scan::ScanError>>),
    /// The page fetch of a paginated query failed.
    #[error("error querying dynamodb: {0}")]
    Querying(#[source] Box<Error>),
    /// The count half of a paginated query failed.
    #[error("error getting query count: {0}")]
    Counting(#[source] Box<Error>),
    /// Several concurrent units failed; every failure is kept.
    #[error("{}", join_errors(.0))]
    Multiple(Vec<Error>),
    /// An item or key could not be converted to or from attribute values.
    #[error(transparent)]
    Serde(Box<serde_dynamo::Error>),
    /// The client could not be configured.
    #[error("unable to load SDK config: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether this error means the requested item does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

macro_rules! impl_from_boxed {
    ($variant:ident, $source:ty) => {
        impl From<$source> for Error {
            fn from(source: $source) -> Self {
                Self::$variant(Box::new(source))
            }
        }
    };
}

impl_from_boxed!(GetItem, error::SdkError<operation::get_item::GetItemError>);
impl_from_boxed!(UpdateItem, error::SdkError<operation::update_item::UpdateItemError>);
impl_from_boxed!(Query, error::SdkError<operation::query::QueryError>);
impl_from_boxed!(Scan, error::SdkError<operation::scan::ScanError>);
impl_from_boxed!(Serde, serde_dynamo::Error);

fn join_errors(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
