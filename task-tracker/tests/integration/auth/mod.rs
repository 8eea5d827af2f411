// tests/integration/auth/mod.rs

mod auth_tests;
