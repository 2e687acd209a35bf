//! Products domain module.
//!
//! This crate contains the catalogue entity and its JSON contract, implemented
//! purely as data (no IO, no HTTP, no storage).

pub mod product;

pub use product::{NewProduct, Product, Spec};
