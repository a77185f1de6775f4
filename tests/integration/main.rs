//! Integration tests driving the HTTP API over in-memory stores.

mod helpers;

mod auth_test;
mod health_test;
mod logout_test;
mod token_test;
