mod page_tests;
mod table_tests;
