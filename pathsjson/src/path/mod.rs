//! Path string normalization.
//!
//! Resolved templates are lexically normalized with
//! [`normalize::normpath`]; implicit bindings such as the directory of the
//! loaded file are made absolute with [`normalize::absolute`].

pub mod normalize;

pub use normalize::{absolute, normpath};
