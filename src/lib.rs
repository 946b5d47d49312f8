pub mod api;
pub mod billing;
pub mod config;
pub mod db;
pub mod docs;
pub mod model;
pub mod routes;
