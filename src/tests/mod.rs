pub mod test_utils;

mod config_tests;
