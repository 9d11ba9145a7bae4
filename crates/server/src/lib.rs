pub mod chess_rules;
pub mod config;
pub mod error;
pub mod routes;
