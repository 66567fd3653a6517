//! Unit tests for email module
