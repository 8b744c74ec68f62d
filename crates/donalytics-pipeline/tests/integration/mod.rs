//! Integration tests for end-to-end pipeline runs.

mod scenarios;
mod stream_handling;
