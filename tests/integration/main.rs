//! Integration test suite.

mod workout_flow_test;
