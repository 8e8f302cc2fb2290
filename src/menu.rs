//! Menus and menu bars.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

use tracing::trace;

use crate::description::ItemDescription;
use crate::error::MenuError;
use crate::handle::MenuHandle;
use crate::item::Item;
use crate::platform_impl;
use crate::position::ItemPosition;
use crate::record::RawMenu;

mod sealed {
    pub trait Sealed {}
}

/// The flavour of native menu a [`BasicMenu`] creates.
pub trait MenuKind: sealed::Sealed {
    #[doc(hidden)]
    fn create() -> Result<RawMenu, MenuError>;
}

/// Drop-down, context and submenus.
#[derive(Debug)]
pub enum Popup {}

/// The horizontal menu attached to a window.
#[derive(Debug)]
pub enum Bar {}

impl sealed::Sealed for Popup {}
impl sealed::Sealed for Bar {}

impl MenuKind for Popup {
    fn create() -> Result<RawMenu, MenuError> {
        platform_impl::create_popup_menu()
    }
}

impl MenuKind for Bar {
    fn create() -> Result<RawMenu, MenuError> {
        platform_impl::create_menu()
    }
}

/// A popup menu. Only popup menus can be nested as submenus.
pub type Menu = BasicMenu<Popup>;

/// A menu bar.
pub type MenuBar = BasicMenu<Bar>;

/// A view of a native menu of kind `K`.
///
/// Everything is read from the live menu on demand; the wrapper holds nothing but the
/// handle. Two wrappers are equal when they refer to the same native menu.
pub struct BasicMenu<K: MenuKind> {
    handle: MenuHandle,
    _kind: PhantomData<K>,
}

impl<K: MenuKind> BasicMenu<K> {
    /// Create a new, empty native menu owned by the wrapper.
    pub fn new() -> Result<Self, MenuError> {
        Ok(Self::from_handle(MenuHandle::adopt(K::create()?)))
    }

    /// Wrap an existing native menu, such as one created by the OS or by other code.
    ///
    /// The handle should refer to the same kind of menu as `K`; the two cannot be told
    /// apart once created, so this is not checked.
    pub fn from_handle(handle: MenuHandle) -> Self {
        Self { handle, _kind: PhantomData }
    }

    pub fn handle(&self) -> &MenuHandle {
        &self.handle
    }

    pub fn into_handle(self) -> MenuHandle {
        self.handle
    }

    /// Number of items in the menu.
    pub fn len(&self) -> Result<usize, MenuError> {
        platform_impl::item_count(self.handle.raw())
    }

    pub fn is_empty(&self) -> Result<bool, MenuError> {
        Ok(self.len()? == 0)
    }

    /// The largest number of items a native menu can address.
    pub fn max_len(&self) -> usize {
        u32::MAX as usize
    }

    /// The item at `index`.
    ///
    /// Fails with [`MenuError::OutOfRange`] if `index` is not below [`len`](Self::len).
    pub fn get(&self, index: usize) -> Result<Item<'_>, MenuError> {
        let len = self.len()?;
        if index >= len {
            return Err(MenuError::OutOfRange { index, len });
        }
        Ok(Item::new(ItemPosition::new(self.handle.raw(), index)))
    }

    /// Iterate over the items of the menu, from either end.
    ///
    /// The item count is read again at every step, so items added or removed while
    /// iterating are taken into account.
    pub fn iter(&self) -> Items<'_> {
        Items { menu: self.handle.raw(), front: 0, back: usize::MAX, _menu: PhantomData }
    }

    /// Create an item from `description` at the end of the menu.
    pub fn insert(&mut self, description: impl Into<ItemDescription>) -> Result<(), MenuError> {
        description.into().insert_into(self.handle.raw(), None)
    }

    /// Create an item from `description` before the item at `index`, shuffling the
    /// following items along. An `index` past the end appends.
    pub fn insert_at(
        &mut self,
        description: impl Into<ItemDescription>,
        index: usize,
    ) -> Result<(), MenuError> {
        description.into().insert_into(self.handle.raw(), Some(index))
    }

    /// Whether the native menu still exists.
    ///
    /// Windows destroy their menu bar when they are destroyed themselves, so a menu can
    /// become invalid outside of this wrapper's control.
    pub fn is_valid(&self) -> bool {
        self.handle.is_valid()
    }
}

impl<K: MenuKind> PartialEq for BasicMenu<K> {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl<K: MenuKind> Eq for BasicMenu<K> {}

impl<K: MenuKind> fmt::Debug for BasicMenu<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicMenu").field("handle", &self.handle).finish()
    }
}

impl<'m, K: MenuKind> IntoIterator for &'m BasicMenu<K> {
    type IntoIter = Items<'m>;
    type Item = Item<'m>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the items of a menu, created by [`BasicMenu::iter`].
///
/// Both cursors are clamped to the live item count at every step. Iteration ends when
/// they meet, or as soon as the menu turns out to be gone.
#[derive(Debug, Clone)]
pub struct Items<'m> {
    menu: RawMenu,
    front: usize,
    back: usize,
    _menu: PhantomData<&'m ()>,
}

impl Items<'_> {
    /// One past the last index still to visit, or `None` once exhausted.
    fn live_end(&mut self) -> Option<usize> {
        let len = match platform_impl::item_count(self.menu) {
            Ok(len) => len,
            Err(err) => {
                trace!("ending iteration over {:?}: {err}", self.menu);
                0
            },
        };
        let end = self.back.min(len);
        if self.front >= end {
            // Stay exhausted even if the menu grows later.
            self.front = usize::MAX;
            self.back = 0;
            return None;
        }
        Some(end)
    }
}

impl<'m> Iterator for Items<'m> {
    type Item = Item<'m>;

    fn next(&mut self) -> Option<Self::Item> {
        self.live_end()?;
        let item = Item::new(ItemPosition::new(self.menu, self.front));
        self.front += 1;
        Some(item)
    }
}

impl DoubleEndedIterator for Items<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.back = self.live_end()? - 1;
        Some(Item::new(ItemPosition::new(self.menu, self.back)))
    }
}

impl FusedIterator for Items<'_> {}
