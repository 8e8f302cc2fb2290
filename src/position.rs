//! Live addressing of a menu item by position.

use crate::error::MenuError;
use crate::platform_impl;
use crate::record::{FieldMask, ItemRecord, RawMenu};

/// A `(menu, index)` pair naming a slot in a live menu.
///
/// Nothing is cached: every accessor goes back to the native menu. The index is not
/// adjusted when the menu changes, so the slot may end up holding a different item or no
/// item at all. Callers that need several fields to agree must fetch them with one
/// [`get_record`](Self::get_record) call and reason about that snapshot only.
///
/// Writing needs `&mut ItemPosition`, which only mutable item views hand out. A read-only
/// visitor cannot change the item it was shown:
///
/// ```compile_fail
/// use winmenu::{CommandItem, FieldMask, ItemRecord, SeparatorItem, SubMenuItem, Visitor};
///
/// struct Sneaky;
///
/// impl Visitor for Sneaky {
///     type Output = ();
///
///     fn visit_separator(&mut self, _: &SeparatorItem) {}
///
///     fn visit_command(&mut self, item: &CommandItem) {
///         let _ = item.position().set_record(&ItemRecord::with_mask(FieldMask::STATE));
///     }
///
///     fn visit_sub_menu(&mut self, _: &SubMenuItem) {}
/// }
/// ```
///
/// Positions are neither `Clone` nor `Copy` for the same reason.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ItemPosition {
    menu: RawMenu,
    index: usize,
}

impl ItemPosition {
    pub(crate) fn new(menu: RawMenu, index: usize) -> Self {
        Self { menu, index }
    }

    /// A second position naming the same slot.
    pub(crate) fn duplicate(&self) -> Self {
        Self::new(self.menu, self.index)
    }

    /// The menu this position belongs to.
    #[inline]
    pub fn menu(&self) -> RawMenu {
        self.menu
    }

    /// Zero-based index of the slot.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Fetch the fields selected by `mask` from the live item.
    ///
    /// Fails with [`MenuError::OutOfRange`] if the menu no longer has an item at this index
    /// and with [`MenuError::InvalidHandle`] if the menu itself is gone.
    pub fn get_record(&self, mask: FieldMask) -> Result<ItemRecord, MenuError> {
        platform_impl::get_item(self.menu, self.index, mask)
    }

    /// Write the fields selected by `record.mask` to the live item.
    ///
    /// Either every selected field is applied or none is.
    pub fn set_record(&mut self, record: &ItemRecord) -> Result<(), MenuError> {
        platform_impl::set_item(self.menu, self.index, record)
    }
}
