//! Type-agnostic menu items and their dispatch to typed views.
//!
//! A native menu item has no stable type: inserting, removing or rewriting items can turn
//! the command at a position into a separator or a submenu at any moment. [`Item`]
//! therefore only remembers *where* the item is. Every dispatch re-reads the native record,
//! classifies it afresh, builds the matching view and hands that view to the caller for the
//! duration of the call.

use std::marker::PhantomData;

use crate::error::MenuError;
use crate::position::ItemPosition;
use crate::record::{FieldMask, ItemRecord};
use crate::visitor::{Visitor, VisitorMut};

mod views;

pub use self::views::{CommandItem, Selectable, SeparatorItem, SubMenuItem, SubMenuRef};

/// What an item currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    Separator,
    Command,
    SubMenu,
}

/// Classify a record holding at least the type and submenu fields.
///
/// The separator flag wins over everything else: a native item can be forced to be a
/// separator and reference a submenu at the same time, and it is treated as a separator.
pub(crate) fn classify(record: &ItemRecord) -> Classification {
    if record.is_separator() {
        Classification::Separator
    } else if record.sub_menu.is_some() {
        Classification::SubMenu
    } else {
        Classification::Command
    }
}

/// Read-only view of an item, as handed to [`Item::visit`].
#[derive(Debug, Clone, Copy)]
pub enum ItemRef<'v> {
    Separator(&'v SeparatorItem),
    Command(&'v CommandItem),
    SubMenu(&'v SubMenuItem),
}

impl<'v> ItemRef<'v> {
    /// The view as a [`Selectable`], unless it is a separator.
    pub fn as_selectable(self) -> Option<&'v dyn Selectable> {
        match self {
            Self::Separator(_) => None,
            Self::Command(item) => Some(item),
            Self::SubMenu(item) => Some(item),
        }
    }

    pub fn position(self) -> &'v ItemPosition {
        match self {
            Self::Separator(item) => item.position(),
            Self::Command(item) => item.position(),
            Self::SubMenu(item) => item.position(),
        }
    }
}

/// Mutable view of an item, as handed to [`Item::visit_mut`].
#[derive(Debug)]
pub enum ItemMut<'v> {
    Separator(&'v mut SeparatorItem),
    Command(&'v mut CommandItem),
    SubMenu(&'v mut SubMenuItem),
}

impl<'v> ItemMut<'v> {
    /// The view as a mutable [`Selectable`], unless it is a separator.
    pub fn into_selectable(self) -> Option<&'v mut dyn Selectable> {
        match self {
            Self::Separator(_) => None,
            Self::Command(item) => Some(item),
            Self::SubMenu(item) => Some(item),
        }
    }
}

/// An item of a menu, whatever it currently is.
///
/// Obtained from [`BasicMenu::get`](crate::BasicMenu::get) or by iterating a menu. It
/// borrows the menu that produced it, so it cannot outlive an owning menu wrapper.
///
/// An `&Item` only dispatches to read-only views through a [`Visitor`]; mutable views need
/// an `&mut Item` and a [`VisitorMut`]. Offering a mutating visitor to a shared item is a
/// compile error:
///
/// ```compile_fail
/// use winmenu::{CommandItem, Item, SeparatorItem, SubMenuItem, VisitorMut};
///
/// struct Mutating;
///
/// impl VisitorMut for Mutating {
///     type Output = ();
///
///     fn visit_separator(&mut self, _: &mut SeparatorItem) {}
///     fn visit_command(&mut self, _: &mut CommandItem) {}
///     fn visit_sub_menu(&mut self, _: &mut SubMenuItem) {}
/// }
///
/// fn shared(item: &Item<'_>) {
///     let _ = item.accept(Mutating);
/// }
/// ```
///
/// For the same reason an `Item` cannot be cloned out of a shared reference.
#[derive(Debug)]
pub struct Item<'m> {
    position: ItemPosition,
    _menu: PhantomData<&'m ()>,
}

impl<'m> Item<'m> {
    pub(crate) fn new(position: ItemPosition) -> Self {
        Self { position, _menu: PhantomData }
    }

    pub fn position(&self) -> &ItemPosition {
        &self.position
    }

    pub fn position_mut(&mut self) -> &mut ItemPosition {
        &mut self.position
    }

    /// Dispatch a read-only view of the item to `visitor` and return its result.
    ///
    /// The item is classified from the live menu on every call, so two calls may reach
    /// different visitor methods if the menu changed in between. If the native record
    /// cannot be read, the error is returned and no visitor method is called.
    ///
    /// ```
    /// use winmenu::{CommandDescription, CommandItem, Menu, Selectable, SeparatorItem};
    /// use winmenu::{SubMenuItem, Visitor};
    ///
    /// struct Describe;
    ///
    /// impl Visitor for Describe {
    ///     type Output = String;
    ///
    ///     fn visit_separator(&mut self, _: &SeparatorItem) -> String {
    ///         "separator".into()
    ///     }
    ///
    ///     fn visit_command(&mut self, item: &CommandItem) -> String {
    ///         format!("command {}", item.id().unwrap())
    ///     }
    ///
    ///     fn visit_sub_menu(&mut self, _: &SubMenuItem) -> String {
    ///         "sub menu".into()
    ///     }
    /// }
    ///
    /// # fn main() -> Result<(), winmenu::MenuError> {
    /// let mut menu = Menu::new()?;
    /// menu.insert(CommandDescription::new("Bob", 42))?;
    /// assert_eq!(menu.get(0)?.accept(Describe)?, "command 42");
    /// # Ok(())
    /// # }
    /// ```
    pub fn accept<V: Visitor>(&self, mut visitor: V) -> Result<V::Output, MenuError> {
        let position = self.position.duplicate();
        Ok(match self.classify()? {
            Classification::Separator => {
                Visitor::visit_separator(&mut visitor, &SeparatorItem::new(position))
            },
            Classification::Command => {
                Visitor::visit_command(&mut visitor, &CommandItem::new(position))
            },
            Classification::SubMenu => {
                Visitor::visit_sub_menu(&mut visitor, &SubMenuItem::new(position))
            },
        })
    }

    /// Dispatch a mutable view of the item to `visitor` and return its result.
    ///
    /// Same classification rules as [`accept`](Self::accept).
    pub fn accept_mut<V: VisitorMut>(&mut self, mut visitor: V) -> Result<V::Output, MenuError> {
        let position = self.position.duplicate();
        Ok(match self.classify()? {
            Classification::Separator => {
                VisitorMut::visit_separator(&mut visitor, &mut SeparatorItem::new(position))
            },
            Classification::Command => {
                VisitorMut::visit_command(&mut visitor, &mut CommandItem::new(position))
            },
            Classification::SubMenu => {
                VisitorMut::visit_sub_menu(&mut visitor, &mut SubMenuItem::new(position))
            },
        })
    }

    /// Hand a read-only view of the item to `f`, for callers that prefer a `match`.
    ///
    /// ```
    /// use winmenu::{ItemRef, Menu, SeparatorDescription};
    ///
    /// # fn main() -> Result<(), winmenu::MenuError> {
    /// let mut menu = Menu::new()?;
    /// menu.insert(SeparatorDescription::new())?;
    /// let is_separator = menu.get(0)?.visit(|view| matches!(view, ItemRef::Separator(_)))?;
    /// assert!(is_separator);
    /// # Ok(())
    /// # }
    /// ```
    pub fn visit<R>(&self, f: impl FnOnce(ItemRef<'_>) -> R) -> Result<R, MenuError> {
        let position = self.position.duplicate();
        Ok(match self.classify()? {
            Classification::Separator => f(ItemRef::Separator(&SeparatorItem::new(position))),
            Classification::Command => f(ItemRef::Command(&CommandItem::new(position))),
            Classification::SubMenu => f(ItemRef::SubMenu(&SubMenuItem::new(position))),
        })
    }

    /// Hand a mutable view of the item to `f`.
    pub fn visit_mut<R>(&mut self, f: impl FnOnce(ItemMut<'_>) -> R) -> Result<R, MenuError> {
        let position = self.position.duplicate();
        Ok(match self.classify()? {
            Classification::Separator => {
                f(ItemMut::Separator(&mut SeparatorItem::new(position)))
            },
            Classification::Command => f(ItemMut::Command(&mut CommandItem::new(position))),
            Classification::SubMenu => f(ItemMut::SubMenu(&mut SubMenuItem::new(position))),
        })
    }

    fn classify(&self) -> Result<Classification, MenuError> {
        let record = self.position.get_record(FieldMask::TYPE | FieldMask::SUB_MENU)?;
        Ok(classify(&record))
    }
}
