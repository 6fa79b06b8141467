//! Blog Aggregator - HTTP gateway shell
//!
//! This crate provides the server bootstrap for a blog aggregator: environment
//! loading, a permissive CORS middleware, JSON response envelopes and the
//! readiness and error probe endpoints.

pub mod config;
pub mod db;
pub mod envelope;
pub mod middleware;
pub mod routes;
