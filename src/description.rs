//! Descriptions of items that are about to be inserted into a menu.
//!
//! A description is not an item: it only says what to create. Once inserted, the item is
//! reached through [`Item`](crate::Item) like any other.

use tracing::debug;

use crate::error::MenuError;
use crate::menu::Menu;
use crate::platform_impl;
use crate::record::{
    CheckMark, FieldMask, Highlight, ItemRecord, ItemState, ItemType, RawMenu, Selectability,
};

/// Describes a separator line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeparatorDescription {
    id: Option<u32>,
}

impl SeparatorDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the separator an identifier.
    ///
    /// The default is no identifier.
    #[inline]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    fn to_record(&self) -> ItemRecord {
        let mut record =
            ItemRecord { item_type: ItemType::SEPARATOR, ..ItemRecord::with_mask(FieldMask::TYPE) };
        if let Some(id) = self.id {
            record.mask |= FieldMask::ID;
            record.id = id;
        }
        record
    }
}

/// Describes a command: a leaf item reporting `id` to its window when chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescription {
    text: String,
    id: u32,
    state: ItemState,
}

impl CommandDescription {
    pub fn new(text: impl Into<String>, id: u32) -> Self {
        Self { text: text.into(), id, state: ItemState::empty() }
    }

    /// The default is [`Selectability::Enabled`].
    #[inline]
    pub fn with_selectability(mut self, selectability: Selectability) -> Self {
        self.state = self.state.with_selectability(selectability);
        self
    }

    /// The default is [`CheckMark::Unchecked`].
    #[inline]
    pub fn with_check_mark(mut self, check_mark: CheckMark) -> Self {
        self.state = self.state.with_check_mark(check_mark);
        self
    }

    /// The default is [`Highlight::Unhighlighted`].
    #[inline]
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.state = self.state.with_highlight(highlight);
        self
    }

    fn to_record(&self) -> ItemRecord {
        ItemRecord {
            mask: FieldMask::TYPE | FieldMask::STATE | FieldMask::ID | FieldMask::TEXT,
            item_type: ItemType::empty(),
            state: self.state,
            id: self.id,
            sub_menu: None,
            text: Some(self.text.clone()),
        }
    }
}

/// Describes an item opening `menu` as a submenu.
///
/// The description owns the submenu. Inserting it hands the submenu over to the parent,
/// which destroys it along with itself; if the insertion fails, dropping the description
/// destroys the submenu as usual.
#[derive(Debug)]
pub struct SubMenuDescription {
    text: String,
    menu: Menu,
    id: Option<u32>,
    state: ItemState,
}

impl SubMenuDescription {
    pub fn new(text: impl Into<String>, menu: Menu) -> Self {
        Self { text: text.into(), menu, id: None, state: ItemState::empty() }
    }

    /// The default is no identifier.
    #[inline]
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    /// The default is [`Selectability::Enabled`].
    #[inline]
    pub fn with_selectability(mut self, selectability: Selectability) -> Self {
        self.state = self.state.with_selectability(selectability);
        self
    }

    /// The default is [`CheckMark::Unchecked`].
    #[inline]
    pub fn with_check_mark(mut self, check_mark: CheckMark) -> Self {
        self.state = self.state.with_check_mark(check_mark);
        self
    }

    /// The default is [`Highlight::Unhighlighted`].
    #[inline]
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.state = self.state.with_highlight(highlight);
        self
    }

    fn to_record(&self) -> ItemRecord {
        let mut record = ItemRecord {
            mask: FieldMask::TYPE | FieldMask::STATE | FieldMask::SUB_MENU | FieldMask::TEXT,
            item_type: ItemType::empty(),
            state: self.state,
            id: 0,
            sub_menu: Some(self.menu.handle().raw()),
            text: Some(self.text.clone()),
        };
        if let Some(id) = self.id {
            record.mask |= FieldMask::ID;
            record.id = id;
        }
        record
    }
}

/// Any item description accepted by [`BasicMenu::insert`](crate::BasicMenu::insert).
#[derive(Debug)]
pub enum ItemDescription {
    Separator(SeparatorDescription),
    Command(CommandDescription),
    SubMenu(SubMenuDescription),
}

impl ItemDescription {
    /// The native record this description inserts.
    pub fn to_record(&self) -> ItemRecord {
        match self {
            Self::Separator(description) => description.to_record(),
            Self::Command(description) => description.to_record(),
            Self::SubMenu(description) => description.to_record(),
        }
    }

    /// Insert into `menu` before `index`, or at the end.
    ///
    /// On success a submenu's ownership has moved to `menu`.
    pub(crate) fn insert_into(self, menu: RawMenu, index: Option<usize>) -> Result<(), MenuError> {
        platform_impl::insert_item(menu, index, &self.to_record())?;

        if let Self::SubMenu(description) = self {
            let sub_menu = description.menu.into_handle().release();
            debug!("menu {menu:?} took ownership of submenu {sub_menu:?}");
        }
        Ok(())
    }
}

impl From<SeparatorDescription> for ItemDescription {
    fn from(description: SeparatorDescription) -> Self {
        Self::Separator(description)
    }
}

impl From<CommandDescription> for ItemDescription {
    fn from(description: CommandDescription) -> Self {
        Self::Command(description)
    }
}

impl From<SubMenuDescription> for ItemDescription {
    fn from(description: SubMenuDescription) -> Self {
        Self::SubMenu(description)
    }
}
