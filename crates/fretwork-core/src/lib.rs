//! Fretwork Core Types and Definitions
//!
//! This crate provides the foundational types for drawing chord diagrams.
//! It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: The drawing surface capability and the recording display list ([`draw`] module)
//! - **Style**: Style tables, overrides and process-wide defaults ([`style`] module)
//! - **Chord**: The per-string marker model ([`chord`] module)

pub mod chord;
pub mod color;
pub mod draw;
pub mod geometry;
pub mod style;
