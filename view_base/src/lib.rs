//! # Base types for boardwalk
//!
//! This is an auxiliary crate for `boardwalk`, which contains the board and
//! pixel-geometry value types. It was split from the main crate so that the
//! plain data types stay usable without the viewer machinery.
//!
//! Normally you don't want to use this crate directly. Use `boardwalk` instead.

pub mod geometry;
pub mod types;
