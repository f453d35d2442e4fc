//! A structural pretty-printer.
//!
//! Values are rendered into an indented tree. The rendering strategy is picked
//! from the static type of the value through the [`Render`] trait, never from
//! runtime data:
//!
//! | Shape | Rendered as |
//! |---|---|
//! | sequences and sets | `[a, b, c]` |
//! | maps | `{k: v, ...}`, keys always on one line |
//! | pairs | `(a, b)` |
//! | [`Enumerated`] types | `ENUM-<ordinal>` |
//! | [`CustomRender`] types | `{ ... }` around their own output |
//! | scalars and text | their `Display` form |
//!
//! Outside inline mode every bracket opens a new, deeper line:
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use quick::printer::{render, render_with, RenderOptions};
//!
//! assert_eq!(render(&vec![1, 2, 3]).unwrap(), "[\n  1, 2, 3\n]");
//! assert_eq!(render_with(&vec![1, 2, 3], &RenderOptions::inline()).unwrap(), "[1, 2, 3]");
//!
//! let map = BTreeMap::from([("a", 1)]);
//! assert_eq!(render(&map).unwrap(), "{\n  a: 1\n}");
//! ```
//!
//! Each type has exactly one rule. Types without a rule, such as tuples with
//! more than two components, do not compile:
//!
//! ```rust,compile_fail
//! quick::printer::render(&(1, 2, 3));
//! ```

use alloc::string::String;

mod context;
pub mod rules;

pub use self::context::{RenderContext, Scoped};
use crate::error::RenderError;

/// Printer configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Spaces emitted per nesting level.
    ///
    /// Default: 2
    pub indentation_unit: usize,

    /// Render everything on a single line.
    ///
    /// Default: false
    pub inline: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indentation_unit: 2,
            inline: false,
        }
    }
}

impl RenderOptions {
    /// Default options with inline mode on.
    pub fn inline() -> Self {
        Self {
            inline: true,
            ..Self::default()
        }
    }

    pub fn with_indentation_unit(mut self, indentation_unit: usize) -> Self {
        self.indentation_unit = indentation_unit;
        self
    }
}

/// A value the printer knows how to render.
///
/// Implemented for the standard collections, pairs and scalars in [`rules`].
/// User types opt in through [`render_enum!`](crate::render_enum) or
/// [`render_custom!`](crate::render_custom).
pub trait Render {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError>;
}

/// A scalar labelled by an integer, such as a field-less enum.
pub trait Enumerated {
    fn ordinal(&self) -> i64;
}

/// A composite that renders its own contents.
///
/// The printer wraps the output in a `{ }` branch; implementations only write
/// what goes inside, usually by rendering their fields through `ctx`.
pub trait CustomRender {
    fn render_fields(&self, ctx: &mut RenderContext) -> Result<(), RenderError>;
}

/// Renders `value` with default options.
pub fn render<T: Render + ?Sized>(value: &T) -> Result<String, RenderError> {
    render_with(value, &RenderOptions::default())
}

pub fn render_with<T: Render + ?Sized>(
    value: &T,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let mut ctx = RenderContext::with_options(options.clone());
    value.render(&mut ctx)?;
    Ok(ctx.into_string())
}

/// Renders `value` into an existing context, continuing at its current depth.
pub fn render_into<T: Render + ?Sized>(
    value: &T,
    ctx: &mut RenderContext,
) -> Result<(), RenderError> {
    value.render(ctx)
}
