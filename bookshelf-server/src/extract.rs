//! Validating extractors
//!
//! Each extractor either yields a typed value or rejects with a 400
//! [`ApiError`], so handlers never see an invalid request and the store is
//! never reached on failure.

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use bookshelf_core::validation::{current_year, validate_book, validate_book_id, validate_filter};
use bookshelf_core::{BookFilter, FailureContext, NewBook, ValidationError, Violation};
use serde_json::Value;
use std::collections::HashMap;

/// A book payload that passed the full schema
#[derive(Debug)]
pub struct ValidBook(pub NewBook);

#[async_trait]
impl<S> FromRequest<S> for ValidBook
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let context = FailureContext::from_method(req.method().as_str());
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let body = parse_body(&bytes).map_err(|err| ApiError::validation(context, &err))?;

        validate_book(&body, current_year())
            .map(Self)
            .map_err(|err| ApiError::validation(context, &err))
    }
}

/// An empty body is treated as JSON `null` so that it fails the object check
fn parse_body(bytes: &[u8]) -> Result<Value, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(bytes).map_err(|_| ValidationError::single(Violation::malformed_json()))
}

/// The list filter from the query string
#[derive(Debug)]
pub struct ValidFilter(pub BookFilter);

#[async_trait]
impl<S> FromRequestParts<S> for ValidFilter
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = FailureContext::from_method(parts.method.as_str());
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        validate_filter(&pairs)
            .map(Self)
            .map_err(|err| ApiError::validation(context, &err))
    }
}

/// The `{id}` path segment, guaranteed non-empty
#[derive(Debug)]
pub struct BookId(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BookId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let context = FailureContext::from_method(parts.method.as_str());
        let missing = || ApiError::validation(context, &ValidationError::single(Violation::required("id")));

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|_| missing())?;
        let id = params.get("id").ok_or_else(missing)?;

        validate_book_id(id)
            .map(|id| Self(id.to_string()))
            .map_err(|err| ApiError::validation(context, &err))
    }
}
