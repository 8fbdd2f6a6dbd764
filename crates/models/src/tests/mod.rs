/// Database connection and configuration tests
pub mod db_tests;

/// Entity mapping and CRUD tests against an in-memory database
pub mod crud_tests;
