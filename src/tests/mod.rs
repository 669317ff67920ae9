//! Fixtures for unit tests and documentation examples
