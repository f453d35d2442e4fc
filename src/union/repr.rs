//! Type catalogs and the untagged storage behind [`UnionValue`].
//!
//! # Implementation details
//!
//! A catalog is a type list written as nested pairs terminated by `()`:
//!
//! ```rust
//! use quick::Catalog;
//!
//! type Abc = Catalog![u8, u16, u32];
//! let _: Option<Abc> = None::<(u8, (u16, (u32, ())))>;
//! ```
//!
//! Each catalog maps to a chain of untagged unions, so its storage is as large
//! as its largest alternative:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // For example only. Not actually defined.
//! type Repr3<A, B, C> = Cons<A, Cons<B, Cons<C, Nil>>>;
//! ```
//!
//! The container keeps the active index next to this storage. Every access
//! through [`Resolve`] is checked against it before a pointer is produced.
//!
//! [`UnionValue`]: crate::UnionValue

use core::{any, convert::Infallible, fmt, mem::ManuallyDrop, ptr};

use crate::index::{Index, UInt, UTerm};

/// The terminator of a catalog's storage chain. Never constructed.
pub struct Nil(pub(crate) Infallible);

/// One link of a catalog's storage chain.
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// A fixed, ordered list of alternative types.
pub trait TypeCatalog {
    /// The untagged storage able to hold any one alternative.
    type Repr;

    /// The number of alternatives.
    const LEN: usize;

    /// The name of the alternative at `index`, or `None` past the end.
    fn type_name(index: usize) -> Option<&'static str>;

    #[doc(hidden)]
    unsafe fn drop_in_place(this: &mut Self::Repr, index: usize);
}

impl TypeCatalog for () {
    type Repr = Nil;

    const LEN: usize = 0;

    fn type_name(_: usize) -> Option<&'static str> {
        None
    }

    unsafe fn drop_in_place(this: &mut Nil, _: usize) {
        match this.0 {}
    }
}

impl<Head, Tail> TypeCatalog for (Head, Tail)
where
    Tail: TypeCatalog,
{
    type Repr = Cons<Head, Tail::Repr>;

    const LEN: usize = 1 + Tail::LEN;

    fn type_name(index: usize) -> Option<&'static str> {
        match index.checked_sub(1) {
            None => Some(any::type_name::<Head>()),
            Some(index) => Tail::type_name(index),
        }
    }

    unsafe fn drop_in_place(this: &mut Self::Repr, index: usize) {
        match index.checked_sub(1) {
            None => unsafe { ManuallyDrop::drop(&mut this.data) },
            Some(index) => unsafe { Tail::drop_in_place(&mut *this.next, index) },
        }
    }
}

/// Resolves index `I` of a catalog to its alternative type.
///
/// Only indices below [`TypeCatalog::LEN`] have an implementation, so an
/// out-of-range index is rejected at build time.
pub trait Resolve<I: Index>: TypeCatalog {
    /// The alternative at index `I`.
    type Output;

    #[doc(hidden)]
    fn wrap(value: Self::Output) -> Self::Repr;

    #[doc(hidden)]
    fn as_ptr(this: &Self::Repr) -> *const Self::Output;

    #[doc(hidden)]
    fn as_mut_ptr(this: &mut Self::Repr) -> *mut Self::Output;
}

/// The alternative type at index `I` of catalog `C`.
pub type TypeAt<C, I> = <C as Resolve<I>>::Output;

impl<Head, Tail> Resolve<UTerm> for (Head, Tail)
where
    Tail: TypeCatalog,
{
    type Output = Head;

    fn wrap(value: Head) -> Self::Repr {
        Cons {
            data: ManuallyDrop::new(value),
        }
    }

    fn as_ptr(this: &Self::Repr) -> *const Head {
        let ptr = ptr::addr_of!(this.data).cast::<Head>();
        debug_assert_eq!(ptr.cast::<Self::Repr>(), this as *const Self::Repr);
        ptr
    }

    fn as_mut_ptr(this: &mut Self::Repr) -> *mut Head {
        let ptr = ptr::addr_of_mut!(this.data).cast::<Head>();
        debug_assert_eq!(ptr.cast::<Self::Repr>(), this as *mut Self::Repr);
        ptr
    }
}

impl<Head, Tail, I: Index> Resolve<UInt<I>> for (Head, Tail)
where
    Tail: Resolve<I>,
{
    type Output = Tail::Output;

    fn wrap(value: Tail::Output) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::wrap(value)),
        }
    }

    fn as_ptr(this: &Self::Repr) -> *const Tail::Output {
        let ptr = Tail::as_ptr(unsafe { &*this.next });
        debug_assert_eq!(ptr.cast::<Self::Repr>(), this as *const Self::Repr);
        ptr
    }

    fn as_mut_ptr(this: &mut Self::Repr) -> *mut Tail::Output {
        let ptr = Tail::as_mut_ptr(unsafe { &mut *this.next });
        debug_assert_eq!(ptr.cast::<Self::Repr>(), this as *mut Self::Repr);
        ptr
    }
}

/// Catalogs whose alternatives are all [`fmt::Debug`].
pub trait CatalogDebug: TypeCatalog {
    #[doc(hidden)]
    unsafe fn debug(this: &Self::Repr, index: usize) -> &dyn fmt::Debug;
}

impl CatalogDebug for () {
    unsafe fn debug(this: &Nil, _: usize) -> &dyn fmt::Debug {
        match this.0 {}
    }
}

impl<Head, Tail> CatalogDebug for (Head, Tail)
where
    Head: fmt::Debug,
    Tail: CatalogDebug,
{
    unsafe fn debug(this: &Self::Repr, index: usize) -> &dyn fmt::Debug {
        match index.checked_sub(1) {
            None => unsafe { &*this.data },
            Some(index) => unsafe { Tail::debug(&*this.next, index) },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;
    use crate::index::*;

    type Abc = (u8, (String, (u64, ())));

    #[test]
    fn len_counts_alternatives() {
        assert_eq!(<() as TypeCatalog>::LEN, 0);
        assert_eq!(<Abc as TypeCatalog>::LEN, 3);
    }

    #[test]
    fn type_names_follow_declaration_order() {
        assert_eq!(Abc::type_name(0), Some("u8"));
        assert_eq!(Abc::type_name(1), Some(any::type_name::<String>()));
        assert_eq!(Abc::type_name(2), Some("u64"));
        assert_eq!(Abc::type_name(3), None);
    }

    #[test]
    fn resolve_points_at_the_stored_value() {
        let mut repr = <Abc as Resolve<U2>>::wrap(7);
        unsafe {
            assert_eq!(*<Abc as Resolve<U2>>::as_ptr(&repr), 7);
            *<Abc as Resolve<U2>>::as_mut_ptr(&mut repr) += 1;
            assert_eq!(*<Abc as Resolve<U2>>::as_ptr(&repr), 8);
            Abc::drop_in_place(&mut repr, 2);
        }
    }
}
