//! Typed views of a menu item.
//!
//! A view is built for a single dispatch and lent to the visitor by reference. Views have
//! no public constructor and are neither `Clone` nor `Copy`, so they cannot outlive the
//! dispatch that classified them.

use std::marker::PhantomData;
use std::ops::Deref;

use crate::error::MenuError;
use crate::menu::Menu;
use crate::position::ItemPosition;
use crate::record::{CheckMark, FieldMask, Highlight, ItemRecord, ItemState, Selectability};
use crate::MenuHandle;

mod sealed {
    use crate::position::ItemPosition;

    pub trait Sealed {
        fn item_position(&self) -> &ItemPosition;

        fn item_position_mut(&mut self) -> &mut ItemPosition;
    }
}

/// Operations shared by items that the user can click: commands and submenus.
///
/// Separators do not implement this trait, so their state cannot even be asked for.
/// Setters do a read-modify-write of only the fields they concern.
pub trait Selectable: sealed::Sealed {
    /// The item's identifier.
    ///
    /// Unlike the position, the identifier follows the item when other items are inserted
    /// before it, which makes it the way to find an item again later.
    fn id(&self) -> Result<u32, MenuError> {
        Ok(self.item_position().get_record(FieldMask::ID)?.id)
    }

    /// The label, or `None` if the item has no text.
    fn text(&self) -> Result<Option<String>, MenuError> {
        Ok(self.item_position().get_record(FieldMask::TEXT)?.text)
    }

    fn set_text(&mut self, text: &str) -> Result<(), MenuError> {
        let record =
            ItemRecord { text: Some(text.to_owned()), ..ItemRecord::with_mask(FieldMask::TEXT) };
        self.item_position_mut().set_record(&record)
    }

    fn is_selectable(&self) -> Result<bool, MenuError> {
        Ok(state(self.item_position())?.selectability() == Selectability::Enabled)
    }

    fn set_selectability(&mut self, selectability: Selectability) -> Result<(), MenuError> {
        update_state(self.item_position_mut(), |state| state.with_selectability(selectability))
    }

    fn check_mark_is_visible(&self) -> Result<bool, MenuError> {
        Ok(state(self.item_position())?.check_mark() == CheckMark::Checked)
    }

    fn set_check_mark(&mut self, check_mark: CheckMark) -> Result<(), MenuError> {
        update_state(self.item_position_mut(), |state| state.with_check_mark(check_mark))
    }

    fn is_highlighted(&self) -> Result<bool, MenuError> {
        Ok(state(self.item_position())?.highlight() == Highlight::Highlighted)
    }

    fn set_highlight(&mut self, highlight: Highlight) -> Result<(), MenuError> {
        update_state(self.item_position_mut(), |state| state.with_highlight(highlight))
    }
}

fn state(position: &ItemPosition) -> Result<ItemState, MenuError> {
    Ok(position.get_record(FieldMask::STATE)?.state)
}

fn update_state(
    position: &mut ItemPosition,
    adjust: impl FnOnce(ItemState) -> ItemState,
) -> Result<(), MenuError> {
    let current = state(position)?;
    let record = ItemRecord { state: adjust(current), ..ItemRecord::with_mask(FieldMask::STATE) };
    position.set_record(&record)
}

/// A separator line.
///
/// Separators have no identifier, no selectable state and no submenu. Even if the native
/// item also references a submenu, it is not reachable through this view.
///
/// ```compile_fail
/// # use winmenu::SeparatorItem;
/// fn read_id(separator: &SeparatorItem) {
///     let _ = separator.id();
/// }
/// ```
#[derive(Debug)]
pub struct SeparatorItem {
    position: ItemPosition,
}

impl SeparatorItem {
    pub(crate) fn new(position: ItemPosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &ItemPosition {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }
}

/// A leaf item that sends its identifier to the owning window when chosen.
#[derive(Debug)]
pub struct CommandItem {
    position: ItemPosition,
}

impl CommandItem {
    pub(crate) fn new(position: ItemPosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &ItemPosition {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }
}

impl sealed::Sealed for CommandItem {
    fn item_position(&self) -> &ItemPosition {
        &self.position
    }

    fn item_position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }
}

impl Selectable for CommandItem {}

/// An item that opens a nested menu.
#[derive(Debug)]
pub struct SubMenuItem {
    position: ItemPosition,
}

impl SubMenuItem {
    pub(crate) fn new(position: ItemPosition) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &ItemPosition {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }

    /// The nested menu, for reading.
    ///
    /// Fails with [`MenuError::InvalidHandle`] if the item no longer references a submenu.
    pub fn menu(&self) -> Result<SubMenuRef<'_>, MenuError> {
        Ok(SubMenuRef { menu: self.nested()?, _view: PhantomData })
    }

    /// The nested menu, for inserting items into it.
    ///
    /// The returned wrapper borrows the native menu: the parent stays its owner.
    pub fn menu_mut(&mut self) -> Result<Menu, MenuError> {
        self.nested()
    }

    fn nested(&self) -> Result<Menu, MenuError> {
        let sub_menu = self
            .position
            .get_record(FieldMask::SUB_MENU)?
            .sub_menu
            .ok_or(MenuError::InvalidHandle)?;
        Ok(Menu::from_handle(MenuHandle::borrow(sub_menu)))
    }
}

/// Shared access to the nested menu of a [`SubMenuItem`], for as long as the view lives.
///
/// Nothing can be inserted through it:
///
/// ```compile_fail
/// use winmenu::{CommandDescription, SubMenuItem};
///
/// fn grow(item: &SubMenuItem) {
///     let mut nested = item.menu().unwrap();
///     let _ = nested.insert(CommandDescription::new("More", 1));
/// }
/// ```
#[derive(Debug)]
pub struct SubMenuRef<'v> {
    menu: Menu,
    _view: PhantomData<&'v SubMenuItem>,
}

impl Deref for SubMenuRef<'_> {
    type Target = Menu;

    fn deref(&self) -> &Menu {
        &self.menu
    }
}

impl sealed::Sealed for SubMenuItem {
    fn item_position(&self) -> &ItemPosition {
        &self.position
    }

    fn item_position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }
}

impl Selectable for SubMenuItem {}
