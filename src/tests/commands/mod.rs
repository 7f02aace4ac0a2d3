pub mod format_test;
