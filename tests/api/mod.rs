//! REST API endpoint tests

mod conference_tests;
mod health_tests;
