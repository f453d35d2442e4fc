#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
pub mod index;
mod macros;
pub mod printer;
pub mod union;

pub use self::{
    error::{RenderError, UnionError},
    union::{
        repr::{Resolve, TypeAt, TypeCatalog},
        UnionValue,
    },
};
