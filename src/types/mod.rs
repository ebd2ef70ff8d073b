//! Shared type definitions
//!
//! Value records passed between storage, the LLM layer and the UI.

pub mod message;
pub mod persona;
