pub mod config;
pub mod error_convert;
pub mod health;
pub mod logging;
pub mod openapi;
pub mod rest;
pub mod state;

pub mod mailgun;

// General application domain modules
pub mod ccd;
pub mod handlers;
pub mod judicial_decision;
pub mod notification;
pub mod parent_case;
