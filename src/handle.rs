//! Ownership-aware native menu handles.

use std::fmt;
use std::marker::PhantomData;

use tracing::{trace, warn};

use crate::error::MenuError;
use crate::platform_impl;
use crate::record::RawMenu;

/// A reference to a native menu that knows whether it is responsible for destroying it.
///
/// An *adopted* handle destroys the native menu when dropped. A *borrowed* handle never
/// does: the menu belongs to the host, to a window, or to a parent menu.
///
/// The native menu may disappear outside of this wrapper's control (for example when the
/// window owning a menu bar is destroyed), so [`is_valid`](Self::is_valid) must be asked
/// rather than assumed.
///
/// Equality compares only the native reference, never the ownership mode.
///
/// Menus are bound to the thread that created them, hence the handle is neither `Send`
/// nor `Sync`.
pub struct MenuHandle {
    raw: RawMenu,
    owned: bool,
    _not_send: PhantomData<*const ()>,
}

impl MenuHandle {
    /// Take ownership of `raw`. The native menu is destroyed when the handle is dropped.
    pub fn adopt(raw: RawMenu) -> Self {
        Self { raw, owned: true, _not_send: PhantomData }
    }

    /// Refer to `raw` without ever destroying it.
    pub fn borrow(raw: RawMenu) -> Self {
        Self { raw, owned: false, _not_send: PhantomData }
    }

    /// A non-owning handle to the same native menu.
    pub fn to_borrowed(&self) -> Self {
        Self::borrow(self.raw)
    }

    #[inline]
    pub fn raw(&self) -> RawMenu {
        self.raw
    }

    /// Whether dropping this handle destroys the native menu.
    #[inline]
    pub fn is_owned(&self) -> bool {
        self.owned
    }

    /// Whether the native menu still exists.
    pub fn is_valid(&self) -> bool {
        platform_impl::is_menu(self.raw)
    }

    /// Give up responsibility for destroying the native menu and return its reference.
    ///
    /// Used when another owner (typically a parent menu) takes the menu over.
    pub fn release(mut self) -> RawMenu {
        self.owned = false;
        self.raw
    }

    pub(crate) fn destroy(&mut self) -> Result<(), MenuError> {
        self.owned = false;
        platform_impl::destroy_menu(self.raw)
    }
}

impl Drop for MenuHandle {
    fn drop(&mut self) {
        if !self.owned {
            return;
        }

        trace!("destroying adopted menu {:?}", self.raw);
        if let Err(err) = self.destroy() {
            warn!("failed to destroy menu {:?}: {err}", self.raw);
        }
    }
}

impl PartialEq for MenuHandle {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for MenuHandle {}

impl fmt::Debug for MenuHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuHandle").field("raw", &self.raw).field("owned", &self.owned).finish()
    }
}
