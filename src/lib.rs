// Library for tests and demos to access modules

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod ingest;
pub mod models;
pub mod nav;
pub mod ordering;
pub mod render;
pub mod version;
pub mod views;
pub mod window;
