#[macro_use]
extern crate diesel;

#[macro_use]
extern crate diesel_migrations;

pub mod admin;
pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod util;
