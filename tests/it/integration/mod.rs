//! Integration tests - full drag sessions driven through the engine.

mod auto_scroll_tests;
