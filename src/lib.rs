// SPDX-License-Identifier: MPL-2.0
//! `iced_chronicle` is an interactive historical timeline viewer built with
//! the Iced GUI framework.
//!
//! A rotating circular navigator selects a timeline, a pair of large years
//! counts through its span, and a horizontal slider pages through its
//! events. The crate demonstrates canvas drawing, a phased transition state
//! machine, internationalization with Fluent, and user preference
//! management.

#![doc(html_root_url = "https://docs.rs/iced_chronicle/0.2.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod timeline;
pub mod ui;
