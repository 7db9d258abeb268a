#![deny(warnings)]

pub mod classify;
pub mod config;
pub mod history;
pub mod pipeline;
pub mod score;
pub mod session;
pub mod speech;
pub mod translate;
