pub mod accounts;
pub mod auth;
pub mod config;
pub mod error;
pub mod identity;
pub mod state;
pub mod todos;
pub mod web;
