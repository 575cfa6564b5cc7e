//! Main module for kif library functionality

pub mod ast;
pub mod config;
pub mod conversion;
pub mod formats;
pub mod formula;
pub mod lexing;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod translation;
