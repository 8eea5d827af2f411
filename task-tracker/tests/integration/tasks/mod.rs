// tests/integration/tasks/mod.rs

mod crud_tests;
mod ownership_tests;
