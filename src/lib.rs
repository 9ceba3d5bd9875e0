// src/lib.rs

//! kym: Know Your Meme slash command library

pub mod dispatch;
pub mod error;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod models;
pub mod services;
pub mod utils;
