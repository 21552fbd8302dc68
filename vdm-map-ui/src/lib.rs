//! Shared Dioxus components and Leaflet/D3.js bridge for the vacation destination map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and D3.js bar chart via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (selector, submit button, banners, containers)
//! - `local_store`: browser `localStorage` backend
//! - `app_store`: the backend chosen for the web build

pub mod app_store;
pub mod components;
pub mod js_bridge;
pub mod local_store;
pub mod state;
