/// Constructs a [`UnionValue`](crate::UnionValue) type from a list of
/// alternative types.
///
/// # Examples
///
/// ```rust
/// use quick::{index::U2, Union};
///
/// type Number = Union![i32, u32, f64];
/// let mut n = Number::new();
/// n.at::<U2>(4.5);
/// ```
#[macro_export]
macro_rules! Union {
    [$($t:ty),* $(,)?] => [$crate::UnionValue::<$crate::Catalog![$($t,)*]>];
}

/// Constructs a type catalog (nested-pair type list) from a list of types.
///
/// # Examples
///
/// ```rust
/// use quick::Catalog;
///
/// type Numbers = Catalog![i32, u32, f64];
/// let _: Option<Numbers> = None::<(i32, (u32, (f64, ())))>;
/// ```
#[macro_export]
macro_rules! Catalog {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::Catalog!($($t,)*))];
}

/// Registers types as enumerated scalars for the printer.
///
/// Each type must implement [`Enumerated`](crate::printer::Enumerated); it
/// renders as `ENUM-` followed by its ordinal.
///
/// ```rust
/// use quick::{printer::{render, Enumerated}, render_enum};
///
/// #[derive(Clone, Copy)]
/// enum Level { Low, High }
///
/// impl Enumerated for Level {
///     fn ordinal(&self) -> i64 {
///         *self as i64
///     }
/// }
///
/// render_enum!(Level);
///
/// assert_eq!(render(&Level::High).unwrap(), "ENUM-1");
/// ```
///
/// A type can be registered with one rule only:
///
/// ```rust,compile_fail
/// use quick::{printer::{CustomRender, Enumerated, RenderContext}, render_custom, render_enum, RenderError};
///
/// struct Both;
///
/// impl Enumerated for Both {
///     fn ordinal(&self) -> i64 { 0 }
/// }
///
/// impl CustomRender for Both {
///     fn render_fields(&self, _: &mut RenderContext) -> Result<(), RenderError> { Ok(()) }
/// }
///
/// render_enum!(Both);
/// render_custom!(Both);
/// ```
#[macro_export]
macro_rules! render_enum {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::printer::Render for $t {
            fn render(
                &self,
                ctx: &mut $crate::printer::RenderContext,
            ) -> ::core::result::Result<(), $crate::RenderError> {
                $crate::printer::rules::enumerated(ctx, self)
            }
        }
    )+};
}

/// Registers types that render their own fields inside `{ }`.
///
/// Each type must implement [`CustomRender`](crate::printer::CustomRender).
///
/// ```rust
/// use quick::{printer::{render, CustomRender, Render, RenderContext}, render_custom, RenderError};
///
/// struct Point { x: i32, y: i32 }
///
/// impl CustomRender for Point {
///     fn render_fields(&self, ctx: &mut RenderContext) -> Result<(), RenderError> {
///         ctx.push_str("x: ");
///         self.x.render(ctx)?;
///         ctx.push_str(", y: ");
///         self.y.render(ctx)
///     }
/// }
///
/// render_custom!(Point);
///
/// assert_eq!(render(&Point { x: 1, y: 2 }).unwrap(), "{\n  x: 1, y: 2\n}");
/// ```
#[macro_export]
macro_rules! render_custom {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::printer::Render for $t {
            fn render(
                &self,
                ctx: &mut $crate::printer::RenderContext,
            ) -> ::core::result::Result<(), $crate::RenderError> {
                $crate::printer::rules::custom(ctx, self)
            }
        }
    )+};
}
