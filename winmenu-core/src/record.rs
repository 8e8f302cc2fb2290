//! The native item-information record and the vocabulary used to address it.
//!
//! A native menu associates a fixed-shape record with each item position. Only the fields
//! named by a [`FieldMask`] are read or written by a single query, so every accessor in
//! `winmenu` fetches exactly what it needs and nothing is kept between calls.

use std::fmt;
use std::num::NonZeroUsize;

use bitflags::bitflags;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An opaque reference to a native menu.
///
/// This is the native value itself (an `HMENU` on Windows), with no ownership attached.
/// Two `RawMenu`s are equal when they name the same native menu.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawMenu(NonZeroUsize);

impl RawMenu {
    /// Wrap a native menu value. Returns `None` for the null menu.
    #[inline]
    pub fn new(value: usize) -> Option<Self> {
        NonZeroUsize::new(value).map(Self)
    }

    /// The native menu value.
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for RawMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RawMenu({:#x})", self.0.get())
    }
}

bitflags! {
    /// Selects which fields of an [`ItemRecord`] a query reads or writes.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct FieldMask: u8 {
        /// [`ItemRecord::item_type`].
        const TYPE = 1 << 0;
        /// [`ItemRecord::state`].
        const STATE = 1 << 1;
        /// [`ItemRecord::id`].
        const ID = 1 << 2;
        /// [`ItemRecord::sub_menu`].
        const SUB_MENU = 1 << 3;
        /// [`ItemRecord::text`].
        const TEXT = 1 << 4;
    }
}

bitflags! {
    /// Type flags of a menu item.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ItemType: u8 {
        /// The item is a separator line. Takes precedence over every other property.
        const SEPARATOR = 1 << 0;
        /// The check mark is drawn as a radio bullet.
        const RADIO_CHECK = 1 << 1;
        /// The item and the ones after it are right-aligned in a menu bar.
        const RIGHT_JUSTIFY = 1 << 2;
        /// The item starts a new column.
        const MENU_BREAK = 1 << 3;
        /// The item starts a new column, separated by a vertical line.
        const MENU_BAR_BREAK = 1 << 4;
    }
}

bitflags! {
    /// State flags of a selectable menu item.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    pub struct ItemState: u8 {
        /// The item cannot be selected.
        const DISABLED = 1 << 0;
        /// The check mark is visible.
        const CHECKED = 1 << 1;
        /// The item is drawn highlighted.
        const HIGHLIGHTED = 1 << 2;
        /// The item is the default item of its menu.
        const DEFAULT = 1 << 3;
    }
}

/// Whether a selectable item can be chosen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Selectability {
    #[default]
    Enabled,
    Disabled,
}

/// Whether a selectable item shows its check mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CheckMark {
    Checked,
    #[default]
    Unchecked,
}

/// Whether a selectable item is drawn highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Highlight {
    Highlighted,
    #[default]
    Unhighlighted,
}

impl ItemState {
    /// Returns the state with the [`DISABLED`](Self::DISABLED) flag adjusted.
    pub fn with_selectability(mut self, selectability: Selectability) -> Self {
        self.set(Self::DISABLED, selectability == Selectability::Disabled);
        self
    }

    /// Returns the state with the [`CHECKED`](Self::CHECKED) flag adjusted.
    pub fn with_check_mark(mut self, check_mark: CheckMark) -> Self {
        self.set(Self::CHECKED, check_mark == CheckMark::Checked);
        self
    }

    /// Returns the state with the [`HIGHLIGHTED`](Self::HIGHLIGHTED) flag adjusted.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.set(Self::HIGHLIGHTED, highlight == Highlight::Highlighted);
        self
    }

    /// Whether the [`DISABLED`](Self::DISABLED) flag is set, as a [`Selectability`].
    pub fn selectability(self) -> Selectability {
        if self.contains(Self::DISABLED) {
            Selectability::Disabled
        } else {
            Selectability::Enabled
        }
    }

    /// Whether the [`CHECKED`](Self::CHECKED) flag is set, as a [`CheckMark`].
    pub fn check_mark(self) -> CheckMark {
        if self.contains(Self::CHECKED) {
            CheckMark::Checked
        } else {
            CheckMark::Unchecked
        }
    }

    /// Whether the [`HIGHLIGHTED`](Self::HIGHLIGHTED) flag is set, as a [`Highlight`].
    pub fn highlight(self) -> Highlight {
        if self.contains(Self::HIGHLIGHTED) {
            Highlight::Highlighted
        } else {
            Highlight::Unhighlighted
        }
    }
}

/// A (possibly partial) copy of a native menu item's information.
///
/// Only the fields named by [`mask`](Self::mask) carry meaning. When a record is read,
/// the other fields hold their defaults; when it is written, the other fields are
/// ignored and the native item keeps its current values for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRecord {
    pub mask: FieldMask,
    pub item_type: ItemType,
    pub state: ItemState,
    pub id: u32,
    pub sub_menu: Option<RawMenu>,
    pub text: Option<String>,
}

impl ItemRecord {
    /// An empty record selecting the given fields.
    pub fn with_mask(mask: FieldMask) -> Self {
        Self { mask, ..Default::default() }
    }

    /// Keep only the fields selected by `mask`, resetting every other field to its default.
    pub fn masked(self, mask: FieldMask) -> Self {
        let mask = self.mask & mask;
        let mut record = Self::with_mask(mask);
        if mask.contains(FieldMask::TYPE) {
            record.item_type = self.item_type;
        }
        if mask.contains(FieldMask::STATE) {
            record.state = self.state;
        }
        if mask.contains(FieldMask::ID) {
            record.id = self.id;
        }
        if mask.contains(FieldMask::SUB_MENU) {
            record.sub_menu = self.sub_menu;
        }
        if mask.contains(FieldMask::TEXT) {
            record.text = self.text;
        }
        record
    }

    /// Whether the record carries the [`SEPARATOR`](ItemType::SEPARATOR) type flag.
    pub fn is_separator(&self) -> bool {
        self.item_type.contains(ItemType::SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_menu_is_none() {
        assert!(RawMenu::new(0).is_none());
        assert_eq!(RawMenu::new(0x1234).map(RawMenu::get), Some(0x1234));
    }

    #[test]
    fn state_adjustments_touch_one_flag() {
        let state = ItemState::CHECKED | ItemState::DEFAULT;

        let disabled = state.with_selectability(Selectability::Disabled);
        assert_eq!(disabled, ItemState::CHECKED | ItemState::DEFAULT | ItemState::DISABLED);
        assert_eq!(disabled.selectability(), Selectability::Disabled);

        let unchecked = disabled.with_check_mark(CheckMark::Unchecked);
        assert_eq!(unchecked, ItemState::DEFAULT | ItemState::DISABLED);
        assert_eq!(unchecked.check_mark(), CheckMark::Unchecked);

        let lit = unchecked.with_highlight(Highlight::Highlighted);
        assert_eq!(lit.highlight(), Highlight::Highlighted);
        assert_eq!(lit.with_highlight(Highlight::Unhighlighted), unchecked);
    }

    #[test]
    fn masked_drops_unselected_fields() {
        let record = ItemRecord {
            mask: FieldMask::all(),
            item_type: ItemType::SEPARATOR,
            state: ItemState::CHECKED,
            id: 42,
            sub_menu: RawMenu::new(7),
            text: Some("Bob".into()),
        };

        let masked = record.masked(FieldMask::ID | FieldMask::TEXT);
        assert_eq!(masked.mask, FieldMask::ID | FieldMask::TEXT);
        assert_eq!(masked.id, 42);
        assert_eq!(masked.text.as_deref(), Some("Bob"));
        assert_eq!(masked.item_type, ItemType::empty());
        assert_eq!(masked.sub_menu, None);
        assert!(!masked.is_separator());
    }

    #[test]
    fn masked_never_widens() {
        let record = ItemRecord { id: 3, ..ItemRecord::with_mask(FieldMask::STATE) };
        assert_eq!(record.masked(FieldMask::all()).id, 0);
    }
}
