//! Portfolio site web frontend
//!
//! The contact section is split into framework-free logic ([`contact`]) and
//! the Dioxus view over it ([`components`], [`state`]).

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod contact;
pub mod state;
