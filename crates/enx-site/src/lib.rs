#![forbid(unsafe_code)]

//! EduAI Nexus demo site library.
//!
//! Exposes the application internals so integration tests can construct
//! the model, drive navigation and widgets, and assert rendered output.
//!
//! The application is the navigation shell over the routing, locale,
//! and content contract: the route table resolves paths, the locale
//! selector switches the content-bundle lookup, and each page is a pure
//! function from (route, locale, mock data) to a document.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod data;
pub mod pages;
pub mod shell;
