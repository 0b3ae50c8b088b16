//! API integration tests
//!
//! Integration tests for all API endpoints

mod blog_test;
