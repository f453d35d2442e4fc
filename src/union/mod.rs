//! The union container: one lazily (re)initialized alternative out of a fixed
//! catalog of types.

use core::{any, fmt, mem::MaybeUninit};

use crate::{error::UnionError, index::Index};

pub mod repr;

use self::repr::{CatalogDebug, Resolve, TypeAt, TypeCatalog};

/// Holds at most one alternative of catalog `C`, addressed by a type-level
/// index.
///
/// Alternatives are constructed on demand by the `at*` accessors. Switching to
/// another index destroys the stored alternative first; asking again for the
/// active index hands back the stored value untouched.
///
/// # Examples
///
/// ```rust
/// use quick::{index::*, Union};
///
/// let mut u: Union![u32, String] = Default::default();
/// assert!(!u.initialized());
///
/// *u.at::<U0>(1) += 1;
/// assert_eq!(u.get::<U0>(), Ok(&2));
///
/// u.at::<U1>("text".to_string());
/// assert_eq!(u.selected_type(), 1);
/// assert!(u.get::<U0>().is_err());
/// ```
///
/// An index past the end of the catalog does not compile:
///
/// ```rust,compile_fail
/// use quick::{index::*, Union};
///
/// let mut u: Union![u32, String] = Default::default();
/// u.at::<U2>(0);
/// ```
pub struct UnionValue<C: TypeCatalog> {
    active: Option<usize>,
    data: MaybeUninit<C::Repr>,
}

impl<C: TypeCatalog> UnionValue<C> {
    /// The number of alternatives, also the value of
    /// [`selected_type`](Self::selected_type) for an empty container.
    pub const ALTERNATIVES: usize = C::LEN;

    /// Creates an empty container.
    pub const fn new() -> Self {
        UnionValue {
            active: None,
            data: MaybeUninit::uninit(),
        }
    }

    /// Selects alternative `I`, storing `value` if it is not already active.
    ///
    /// When `I` is already active the stored alternative is returned as is and
    /// `value` is dropped without being stored.
    pub fn at<I: Index>(&mut self, value: TypeAt<C, I>) -> &mut TypeAt<C, I>
    where
        C: Resolve<I>,
    {
        self.at_with::<I, _>(move || value)
    }

    /// Selects alternative `I`, building it with `init` if it is not already
    /// active.
    ///
    /// The previous alternative, if any, is destroyed before `init` runs.
    /// `init` is not called at all when `I` is already active.
    pub fn at_with<I: Index, F>(&mut self, init: F) -> &mut TypeAt<C, I>
    where
        C: Resolve<I>,
        F: FnOnce() -> TypeAt<C, I>,
    {
        if self.active != Some(I::TAG) {
            self.clear();
            tracing::trace!(
                index = I::TAG,
                alternative = any::type_name::<TypeAt<C, I>>(),
                "constructing alternative"
            );
            self.data.write(C::wrap(init()));
            self.active = Some(I::TAG);
        }
        // SAFETY: `active` is `I`, so `data` holds a live `TypeAt<C, I>`.
        unsafe { &mut *C::as_mut_ptr(self.data.assume_init_mut()) }
    }

    /// Selects alternative `I`, default-constructing it if it is not already
    /// active.
    pub fn at_default<I: Index>(&mut self) -> &mut TypeAt<C, I>
    where
        C: Resolve<I>,
        TypeAt<C, I>: Default,
    {
        self.at_with::<I, _>(<TypeAt<C, I> as Default>::default)
    }

    /// Returns alternative `I` if it is the active one.
    pub fn get<I: Index>(&self) -> Result<&TypeAt<C, I>, UnionError>
    where
        C: Resolve<I>,
    {
        self.ensure_active::<I>()?;
        // SAFETY: checked above.
        Ok(unsafe { &*C::as_ptr(self.data.assume_init_ref()) })
    }

    /// Returns alternative `I` mutably if it is the active one. Never
    /// constructs.
    pub fn get_mut<I: Index>(&mut self) -> Result<&mut TypeAt<C, I>, UnionError>
    where
        C: Resolve<I>,
    {
        self.ensure_active::<I>()?;
        // SAFETY: checked above.
        Ok(unsafe { &mut *C::as_mut_ptr(self.data.assume_init_mut()) })
    }

    /// Destroys the stored alternative, if any.
    pub fn clear(&mut self) {
        if let Some(index) = self.active.take() {
            tracing::trace!(index, alternative = C::type_name(index), "destroying alternative");
            // SAFETY: `index` was the active alternative and is no longer
            // reachable now that `active` is `None`.
            unsafe { C::drop_in_place(self.data.assume_init_mut(), index) }
        }
    }

    /// Whether an alternative is stored.
    pub fn initialized(&self) -> bool {
        self.active.is_some()
    }

    /// The active index, or [`ALTERNATIVES`](Self::ALTERNATIVES) when empty.
    pub fn selected_type(&self) -> usize {
        self.active.unwrap_or(C::LEN)
    }

    fn ensure_active<I: Index>(&self) -> Result<(), UnionError>
    where
        C: Resolve<I>,
    {
        if self.active == Some(I::TAG) {
            Ok(())
        } else {
            Err(UnionError::InactiveAlternative {
                requested: I::TAG,
                requested_type: any::type_name::<TypeAt<C, I>>(),
                selected: self.selected_type(),
            })
        }
    }
}

impl<C: TypeCatalog> Default for UnionValue<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TypeCatalog> Drop for UnionValue<C> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<C: CatalogDebug> fmt::Debug for UnionValue<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.active {
            // SAFETY: `index` is the active alternative.
            Some(index) => f
                .debug_struct("UnionValue")
                .field("index", &index)
                .field("value", unsafe { C::debug(self.data.assume_init_ref(), index) })
                .finish(),
            None => f.write_str("UnionValue(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        format,
        rc::Rc,
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;
    use crate::index::*;

    /// Counts how many times values sharing `drops` were destroyed.
    #[derive(Debug)]
    struct Tracked {
        id: u32,
        drops: Rc<Cell<u32>>,
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    type Alts = crate::Catalog![Tracked, String, u32];

    #[test]
    fn starts_empty() {
        let u = UnionValue::<Alts>::new();
        assert!(!u.initialized());
        assert_eq!(u.selected_type(), 3);
        assert_eq!(UnionValue::<Alts>::ALTERNATIVES, 3);
    }

    #[test]
    fn switching_destroys_previous_alternative_once() {
        let drops = Rc::new(Cell::new(0));
        let mut u = UnionValue::<Alts>::new();

        u.at::<U0>(Tracked {
            id: 1,
            drops: drops.clone(),
        });
        assert_eq!(u.selected_type(), 0);
        assert_eq!(drops.get(), 0);

        u.at::<U1>("hello".to_string());
        assert_eq!(u.selected_type(), 1);
        assert_eq!(drops.get(), 1);

        u.at::<U2>(5);
        u.clear();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn previous_alternative_is_gone_before_the_next_is_built() {
        let drops = Rc::new(Cell::new(0));
        let mut u = UnionValue::<Alts>::new();
        u.at::<U0>(Tracked {
            id: 1,
            drops: drops.clone(),
        });

        let seen = drops.clone();
        u.at_with::<U2, _>(move || {
            assert_eq!(seen.get(), 1);
            9
        });
        assert_eq!(u.get::<U2>(), Ok(&9));
    }

    /// Current contract: requesting the active index again keeps the stored
    /// value and discards the new one.
    #[test]
    fn same_index_keeps_first_value() {
        let drops = Rc::new(Cell::new(0));
        let mut u = UnionValue::<Alts>::new();

        u.at::<U0>(Tracked {
            id: 1,
            drops: drops.clone(),
        });
        let kept = u.at::<U0>(Tracked {
            id: 2,
            drops: drops.clone(),
        });
        assert_eq!(kept.id, 1);
        // The discarded argument is dropped; the stored one is not.
        assert_eq!(drops.get(), 1);

        u.at::<U1>("first".to_string());
        assert_eq!(u.at::<U1>("second".to_string()).as_str(), "first");
    }

    #[test]
    fn same_index_does_not_run_the_initializer() {
        let mut u = UnionValue::<Alts>::new();
        u.at::<U2>(1);

        let mut called = false;
        let value = u.at_with::<U2, _>(|| {
            called = true;
            2
        });
        assert_eq!(*value, 1);
        assert!(!called);
    }

    #[test]
    fn at_default_builds_an_empty_value() {
        let mut u = UnionValue::<Alts>::new();
        u.at_default::<U1>().push_str("abc");
        assert_eq!(u.get::<U1>().map(String::as_str), Ok("abc"));
        assert_eq!(u.at_default::<U1>().as_str(), "abc");
    }

    #[test]
    fn get_fails_for_inactive_alternative() {
        let mut u = UnionValue::<Alts>::new();
        assert_eq!(
            u.get::<U1>(),
            Err(UnionError::InactiveAlternative {
                requested: 1,
                requested_type: any::type_name::<String>(),
                selected: 3,
            })
        );

        u.at::<U1>("x".to_string());
        assert_eq!(u.get::<U1>().map(String::as_str), Ok("x"));
        assert!(matches!(
            u.get::<U2>(),
            Err(UnionError::InactiveAlternative {
                requested: 2,
                selected: 1,
                ..
            })
        ));
    }

    #[test]
    fn get_mut_never_constructs() {
        let mut u = UnionValue::<Alts>::new();
        assert!(u.get_mut::<U2>().is_err());
        assert!(!u.initialized());

        u.at::<U2>(3);
        *u.get_mut::<U2>().unwrap() *= 7;
        assert_eq!(u.get::<U2>(), Ok(&21));
    }

    #[test]
    fn clear_resets_to_sentinel() {
        let drops = Rc::new(Cell::new(0));
        let mut u = UnionValue::<Alts>::new();
        u.at::<U0>(Tracked {
            id: 1,
            drops: drops.clone(),
        });

        u.clear();
        assert!(!u.initialized());
        assert_eq!(u.selected_type(), 3);
        assert_eq!(drops.get(), 1);

        u.clear();
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn drop_releases_active_alternative() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut u = UnionValue::<Alts>::new();
            u.at::<U0>(Tracked {
                id: 1,
                drops: drops.clone(),
            });
        }
        assert_eq!(drops.get(), 1);
    }

    #[test]
    fn heap_alternatives_survive_switching() {
        let mut u = UnionValue::<crate::Catalog![Vec<String>, String]>::new();
        for round in 0..3 {
            u.at::<U0>(Vec::new()).push(round.to_string());
            u.at::<U1>(format!("round {round}"));
        }
        assert_eq!(u.get::<U1>().map(String::as_str), Ok("round 2"));
    }

    #[test]
    fn debug_shows_active_alternative() {
        let mut u = UnionValue::<crate::Catalog![u8, &str]>::new();
        assert_eq!(format!("{u:?}"), "UnionValue(<empty>)");
        u.at::<U1>("hi");
        assert_eq!(format!("{u:?}"), r#"UnionValue { index: 1, value: "hi" }"#);
    }
}
