//! Integration tests for adbar

mod cli_test;
mod helpers;
mod replay_test;
mod session_test;
