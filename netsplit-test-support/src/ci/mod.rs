//! Environment-driven knobs shared by CI test runs.

pub mod property_test_profile;
