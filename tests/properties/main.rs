//! Property-based test suite entry point.

mod metric_properties;
