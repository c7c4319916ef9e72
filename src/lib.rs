pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod flash;
pub mod migrator;
pub mod routes;
pub mod services;
pub mod state;
pub mod vues;
