//! Response sinks - where the controller writes its single terminal result.
//!
//! A sink is consumed by its terminal write, so a handler can produce either
//! a JSON body or a bare status, never both.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::Serialize;

/// Outbound response the controller writes to exactly once.
pub trait ResponseSink: Sized {
    type Output;
    type Status: EndResponse<Output = Self::Output>;

    /// Write `payload` as a JSON body with status 200.
    fn json<T: Serialize>(self, payload: &T) -> Self::Output;

    /// Set a status code; the response is terminated by `end()`.
    fn status(self, code: StatusCode) -> Self::Status;
}

/// A status-only response waiting to be terminated.
pub trait EndResponse {
    type Output;

    /// Terminate the response with no body.
    fn end(self) -> Self::Output;
}

/// Sink producing an actix-web `HttpResponse`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpSink;

impl ResponseSink for HttpSink {
    type Output = HttpResponse;
    type Status = HttpResponseBuilder;

    fn json<T: Serialize>(self, payload: &T) -> HttpResponse {
        HttpResponse::Ok().json(payload)
    }

    fn status(self, code: StatusCode) -> HttpResponseBuilder {
        HttpResponse::build(code)
    }
}

impl EndResponse for HttpResponseBuilder {
    type Output = HttpResponse;

    fn end(mut self) -> HttpResponse {
        self.finish()
    }
}
