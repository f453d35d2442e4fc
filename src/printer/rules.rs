//! The render rules, and the [`Render`] impls that route each standard type
//! to exactly one of them.

use alloc::{
    boxed::Box,
    collections::{BTreeMap, BTreeSet, BinaryHeap, LinkedList, VecDeque},
    rc::Rc,
    string::String,
    sync::Arc,
    vec::Vec,
};
use core::fmt::Display;
#[cfg(feature = "std")]
use std::collections::{HashMap, HashSet};

use super::{CustomRender, Enumerated, Render, RenderContext};
use crate::error::RenderError;

/// `[a, b, c]`, or `[]` when there are no items.
pub fn sequence<'a, T, I>(ctx: &mut RenderContext, items: I) -> Result<(), RenderError>
where
    T: Render + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut items = items.into_iter().peekable();
    if items.peek().is_none() {
        ctx.push_str("[]");
        return Ok(());
    }

    ctx.branch_start('[');
    for (i, item) in items.enumerate() {
        if i > 0 {
            ctx.push_str(", ");
        }
        item.render(ctx)?;
    }
    ctx.branch_end(']')
}

/// `{k: v, ...}`, or `{}` when there are no entries.
///
/// Keys are rendered inline whatever the ambient mode. Outside inline mode
/// each entry after the first starts on its own line.
pub fn map<'a, K, V, I>(ctx: &mut RenderContext, entries: I) -> Result<(), RenderError>
where
    K: Render + ?Sized + 'a,
    V: Render + ?Sized + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    let mut entries = entries.into_iter().peekable();
    if entries.peek().is_none() {
        ctx.push_str("{}");
        return Ok(());
    }

    ctx.branch_start('{');
    for (i, (key, value)) in entries.enumerate() {
        if i > 0 {
            let separator = if ctx.is_inline() { ' ' } else { '\n' };
            ctx.push_char(',');
            ctx.push_char(separator);
        }
        key.render(&mut ctx.with_inline_mode(true))?;
        ctx.push_str(": ");
        value.render(ctx)?;
    }
    ctx.branch_end('}')
}

/// `(first, second)`.
pub fn pair<A, B>(ctx: &mut RenderContext, first: &A, second: &B) -> Result<(), RenderError>
where
    A: Render + ?Sized,
    B: Render + ?Sized,
{
    ctx.branch_start('(');
    first.render(ctx)?;
    ctx.push_str(", ");
    second.render(ctx)?;
    ctx.branch_end(')')
}

/// `ENUM-<ordinal>`.
pub fn enumerated<T: Enumerated + ?Sized>(
    ctx: &mut RenderContext,
    value: &T,
) -> Result<(), RenderError> {
    ctx.push_str("ENUM-");
    ctx.append_primitive(&value.ordinal())
}

/// `{ ... }` around the value's own output.
pub fn custom<T: CustomRender + ?Sized>(
    ctx: &mut RenderContext,
    value: &T,
) -> Result<(), RenderError> {
    ctx.branch_start('{');
    value.render_fields(ctx)?;
    ctx.branch_end('}')
}

pub fn primitive<T: Display + ?Sized>(ctx: &mut RenderContext, value: &T) -> Result<(), RenderError> {
    ctx.append_primitive(value)
}

macro_rules! impl_primitive {
    ($($t:ty)*) => {$(
        impl Render for $t {
            fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
                primitive(ctx, self)
            }
        }
    )*};
}

impl_primitive! {
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64 bool char str String
}

macro_rules! impl_sequence {
    ($($t:ident),*) => {$(
        impl<T: Render> Render for $t<T> {
            fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
                sequence(ctx, self)
            }
        }
    )*};
}

impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet, BinaryHeap);

impl<T: Render> Render for [T] {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        sequence(ctx, self)
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        sequence(ctx, self)
    }
}

#[cfg(feature = "std")]
impl<T: Render, S> Render for HashSet<T, S> {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        sequence(ctx, self)
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        map(ctx, self)
    }
}

#[cfg(feature = "std")]
impl<K: Render, V: Render, S> Render for HashMap<K, V, S> {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        map(ctx, self)
    }
}

impl<A: Render, B: Render> Render for (A, B) {
    fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
        pair(ctx, &self.0, &self.1)
    }
}

macro_rules! impl_transparent {
    ($($ptr:ty),*) => {$(
        impl<T: Render + ?Sized> Render for $ptr {
            fn render(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
                (**self).render(ctx)
            }
        }
    )*};
}

impl_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

static_assertions::assert_impl_all!(Vec<(String, BTreeMap<u8, [bool; 2]>)>: Render);
static_assertions::assert_impl_all!(Box<[&'static str]>: Render);
static_assertions::assert_not_impl_any!((u8, u8, u8): Render);
static_assertions::assert_not_impl_any!((): Render);
static_assertions::assert_not_impl_any!(Option<u8>: Render);
