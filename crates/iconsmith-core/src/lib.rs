//! Iconsmith Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Iconsmith
//! crates. It includes:
//!
//! - **Shapes**: The closed set of supported shape elements ([`shape::ShapeKind`])
//!   and the immutable shape tree ([`shape::ShapeNode`])
//! - **Icons**: Icon definitions from symbol sprites and standalone files ([`icon`] module)
//! - **Naming**: Component name and lookup key derivation ([`naming`] module)

pub mod icon;
pub mod naming;
pub mod shape;
