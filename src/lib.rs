// ABOUTME: Library crate for AML Lab exposing the wizard controller, dashboard components, and CLI

#![allow(missing_docs)]

pub mod app;
pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod scenario;
pub mod widgets;
pub mod wizard;
