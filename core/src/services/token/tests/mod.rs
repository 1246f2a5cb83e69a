//! Tests for the token service

#[cfg(test)]
mod config_tests;
