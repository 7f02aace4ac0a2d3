pub mod export_test;
