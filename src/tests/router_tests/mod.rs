mod create_tests;
mod detail_tests;
