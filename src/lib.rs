//! Twinchat Library
//!
//! Core library for the Twinchat desktop application: a chat with a
//! "digital twin" persona grounded in a user-written biography.

pub mod app;
pub mod llm;
pub mod storage;
pub mod types;
pub mod ui;
