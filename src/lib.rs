pub mod client;
pub mod common;
pub mod config;
pub mod db;
pub mod i18n;
pub mod menu;
pub mod models;
pub mod schedule;
pub mod services;
pub mod storage;
pub mod types;
