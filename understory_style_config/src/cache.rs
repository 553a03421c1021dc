// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity-preserving result cache.
//!
//! Consumers typically compare results by identity (`Rc::ptr_eq`) to decide
//! whether to redo downstream work. The cache hands out the previous `Rc`
//! whenever a freshly computed result has the same content, and a new one
//! only when the content changed.

use std::rc::Rc;

use tracing::trace;

use crate::equality::EqualityOracle;
use crate::value::StyleObject;

/// Outcome of [`reconcile`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reconciled {
    /// The fresh result matched; the cached handle is kept.
    Kept(Rc<StyleObject>),
    /// The fresh result differed and becomes the new cached handle.
    Replaced(Rc<StyleObject>),
}

impl Reconciled {
    /// Returns `true` if the cached value was replaced.
    #[must_use]
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced(_))
    }

    /// Returns the handle to hand out (and to cache).
    #[must_use]
    pub fn into_inner(self) -> Rc<StyleObject> {
        match self {
            Self::Kept(rc) | Self::Replaced(rc) => rc,
        }
    }
}

/// Decides which handle to keep for a freshly computed result.
///
/// ```rust
/// use std::rc::Rc;
/// use serde_json::json;
/// use understory_style_config::{Reconciled, StructuralEq, reconcile};
///
/// let cached = Rc::new(json!({ "color": "red" }).as_object().cloned().unwrap());
///
/// let same = json!({ "color": "red" }).as_object().cloned().unwrap();
/// let kept = reconcile(&StructuralEq, &cached, same);
/// assert!(matches!(&kept, Reconciled::Kept(rc) if Rc::ptr_eq(rc, &cached)));
///
/// let other = json!({ "color": "blue" }).as_object().cloned().unwrap();
/// assert!(reconcile(&StructuralEq, &cached, other).is_replaced());
/// ```
#[must_use]
pub fn reconcile<E: EqualityOracle + ?Sized>(
    oracle: &E,
    cached: &Rc<StyleObject>,
    fresh: StyleObject,
) -> Reconciled {
    if oracle.equals(cached, &fresh) {
        Reconciled::Kept(Rc::clone(cached))
    } else {
        Reconciled::Replaced(Rc::new(fresh))
    }
}

/// The cache slot owned by one resolving instance.
///
/// Starts out holding an empty object. The slot is `!Send`: a slot belongs
/// to exactly one instance and is updated sequentially.
#[derive(Debug, Default)]
pub struct StyleCache {
    last: Rc<StyleObject>,
}

impl StyleCache {
    /// Creates a slot holding an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the currently held result.
    #[must_use]
    pub fn current(&self) -> &Rc<StyleObject> {
        &self.last
    }

    /// Reconciles `fresh` against the held result and returns the handle to use.
    pub fn update<E: EqualityOracle + ?Sized>(
        &mut self,
        oracle: &E,
        fresh: StyleObject,
    ) -> Rc<StyleObject> {
        let outcome = reconcile(oracle, &self.last, fresh);
        let replaced = outcome.is_replaced();
        self.last = outcome.into_inner();
        if replaced {
            trace!(keys = self.last.len(), "style cache replaced");
        } else {
            trace!("style cache kept");
        }
        Rc::clone(&self.last)
    }

    /// Empties the slot, dropping the held result.
    pub fn reset(&mut self) {
        self.last = Rc::default();
    }
}
