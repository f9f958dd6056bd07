//! Unit test suite.

mod duration_test;
mod session_tracker_test;
