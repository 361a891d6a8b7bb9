use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

/// Query extractor that never rejects a request.
///
/// A query string that does not deserialize (repeated keys, broken
/// percent-encoding) is treated as if no parameters were sent, so the
/// handler falls back to its defaults instead of answering 400.
pub struct LenientQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for LenientQuery<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!("Ignoring unparseable query string: {}", rejection);
                Ok(Self(T::default()))
            }
        }
    }
}
