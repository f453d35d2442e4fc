use alloc::string::String;
use core::{
    fmt,
    iter,
    ops::{Deref, DerefMut},
};

use super::{Render, RenderOptions};
use crate::error::RenderError;

/// Mutable printer state: nesting depth, indentation, inline mode and the
/// output buffer.
///
/// Not meant to be shared: every top-level render creates its own context.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    depth: usize,
    options: RenderOptions,
    buffer: String,
}

impl RenderContext {
    /// An empty context with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RenderOptions) -> Self {
        RenderContext {
            depth: 0,
            options,
            buffer: String::new(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn indentation_unit(&self) -> usize {
        self.options.indentation_unit
    }

    pub fn is_inline(&self) -> bool {
        self.options.inline
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Sets inline mode until changed again. Prefer
    /// [`with_inline_mode`](Self::with_inline_mode) for local changes.
    pub fn set_inline(&mut self, inline: bool) -> &mut Self {
        self.options.inline = inline;
        self
    }

    pub fn set_indentation_unit(&mut self, unit: usize) -> &mut Self {
        self.options.indentation_unit = unit;
        self
    }

    /// Renders `value` into this context, returning it for chaining.
    pub fn render<T: Render + ?Sized>(&mut self, value: &T) -> Result<&mut Self, RenderError> {
        value.render(self)?;
        Ok(self)
    }

    /// Appends a scalar through its `Display` form.
    ///
    /// Every `'\n'` written this way is followed by the current indentation,
    /// so embedded line breaks stay aligned with the surrounding structure.
    pub fn append_primitive<T: fmt::Display + ?Sized>(
        &mut self,
        value: &T,
    ) -> Result<(), RenderError> {
        fmt::Write::write_fmt(self, format_args!("{value}"))?;
        Ok(())
    }

    pub fn push_char(&mut self, c: char) {
        self.buffer.push(c);
        if c == '\n' {
            self.indent();
        }
    }

    pub fn push_str(&mut self, s: &str) {
        s.chars().for_each(|c| self.push_char(c));
    }

    /// Opens a branch with `open`. Outside inline mode this also starts a new,
    /// deeper line.
    pub fn branch_start(&mut self, open: char) {
        self.push_char(open);
        if !self.options.inline {
            self.buffer.push('\n');
            self.depth += 1;
            self.indent();
        }
    }

    /// Closes the innermost branch with `close`.
    ///
    /// Inline mode suspends depth tracking, so there this only appends
    /// `close`.
    pub fn branch_end(&mut self, close: char) -> Result<(), RenderError> {
        if !self.options.inline {
            self.buffer.push('\n');
            if self.depth == 0 {
                tracing::debug!(%close, "branch end without matching start");
                return Err(RenderError::UnbalancedClose { close });
            }
            self.depth -= 1;
            self.indent();
        }
        self.push_char(close);
        Ok(())
    }

    /// Overrides inline mode until the returned guard is dropped.
    pub fn with_inline_mode(&mut self, inline: bool) -> Scoped<'_, bool> {
        Scoped::new(self, |ctx| &mut ctx.options.inline, inline)
    }

    /// Overrides the indentation unit until the returned guard is dropped.
    pub fn with_indentation_unit(&mut self, unit: usize) -> Scoped<'_, usize> {
        Scoped::new(self, |ctx| &mut ctx.options.indentation_unit, unit)
    }

    fn indent(&mut self) {
        let width = self.depth * self.options.indentation_unit;
        self.buffer.extend(iter::repeat(' ').take(width));
    }
}

impl fmt::Write for RenderContext {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.push_str(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push_char(c);
        Ok(())
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// A temporary override of one [`RenderContext`] field.
///
/// The overwritten value is put back when the guard is dropped, whichever way
/// the scope is left. The guard dereferences to the context, so rendering and
/// further overrides go through it; nested guards unwind in stack order.
pub struct Scoped<'a, T: Copy> {
    ctx: &'a mut RenderContext,
    field: fn(&mut RenderContext) -> &mut T,
    original: T,
}

impl<'a, T: Copy> Scoped<'a, T> {
    fn new(ctx: &'a mut RenderContext, field: fn(&mut RenderContext) -> &mut T, value: T) -> Self {
        let original = core::mem::replace(field(ctx), value);
        Scoped {
            ctx,
            field,
            original,
        }
    }
}

impl<T: Copy> Deref for Scoped<'_, T> {
    type Target = RenderContext;

    fn deref(&self) -> &RenderContext {
        &*self.ctx
    }
}

impl<T: Copy> DerefMut for Scoped<'_, T> {
    fn deref_mut(&mut self) -> &mut RenderContext {
        &mut *self.ctx
    }
}

impl<T: Copy> Drop for Scoped<'_, T> {
    fn drop(&mut self) {
        *(self.field)(&mut *self.ctx) = self.original;
    }
}
