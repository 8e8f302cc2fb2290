//! Typed views over native menus, menu bars and their items.
//!
//! # Items have no stable type
//!
//! A slot in a native menu can hold a separator, a command or a submenu, and what it
//! holds can change at any time: the application, other libraries or the OS itself may
//! insert, remove or rewrite items behind this crate's back. Hence an [`Item`] does not
//! know what it is. To work with it, hand it a [`Visitor`]:
//!
//! ```
//! use winmenu::{CommandDescription, CommandItem, Menu, Selectable, SeparatorItem};
//! use winmenu::{SubMenuDescription, SubMenuItem, Visitor};
//!
//! struct Label;
//!
//! impl Visitor for Label {
//!     type Output = Option<String>;
//!
//!     fn visit_separator(&mut self, _: &SeparatorItem) -> Option<String> {
//!         None
//!     }
//!
//!     fn visit_command(&mut self, item: &CommandItem) -> Option<String> {
//!         item.text().ok().flatten()
//!     }
//!
//!     fn visit_sub_menu(&mut self, item: &SubMenuItem) -> Option<String> {
//!         item.text().ok().flatten().map(|text| format!("{text} >"))
//!     }
//! }
//!
//! # fn main() -> Result<(), winmenu::MenuError> {
//! let mut recent = Menu::new()?;
//! recent.insert(CommandDescription::new("notes.txt", 100))?;
//!
//! let mut file = Menu::new()?;
//! file.insert(CommandDescription::new("Open", 1))?;
//! file.insert(SubMenuDescription::new("Recent", recent))?;
//!
//! let labels: Vec<_> = file.iter().map(|item| item.accept(Label)).collect::<Result<_, _>>()?;
//! assert_eq!(labels, [Some("Open".to_owned()), Some("Recent >".to_owned())]);
//! # Ok(())
//! # }
//! ```
//!
//! Every call to [`Item::accept`] reads the native item again, classifies it and builds a
//! fresh view, which only lives until the visitor returns. The typed views
//! ([`SeparatorItem`], [`CommandItem`], [`SubMenuItem`]) cannot be constructed or kept
//! outside of such a call. To find an item again later, remember its identifier or its
//! position instead.
//!
//! Visitors must handle every kind of item; a missing case is a compile error. A shared
//! `&Item` only offers read-only views, while an `&mut Item` accepts a [`VisitorMut`].
//! [`Item::visit`] and [`Item::visit_mut`] provide the same dispatch as a `match` over
//! [`ItemRef`] / [`ItemMut`].
//!
//! # Ownership
//!
//! A [`MenuHandle`] either owns its native menu (and destroys it when dropped) or borrows
//! it. Inserting a [`SubMenuDescription`] moves the submenu's ownership into the parent,
//! so a native menu never has two owners.
//!
//! # Backends
//!
//! On Windows, menus are Win32 menus. On every other platform an in-process menu store
//! with the same semantics is used.
//!
//! # Cargo features
//!
//! * `serde`: Enables serialization/deserialization of the flag types and item states.

pub use winmenu_core::{error, record};

#[doc(inline)]
pub use crate::error::{MenuError, OsError};
#[doc(inline)]
pub use crate::record::{
    CheckMark, FieldMask, Highlight, ItemRecord, ItemState, ItemType, RawMenu, Selectability,
};

pub use crate::description::{
    CommandDescription, ItemDescription, SeparatorDescription, SubMenuDescription,
};
pub use crate::handle::MenuHandle;
pub use crate::item::{
    CommandItem, Item, ItemMut, ItemRef, Selectable, SeparatorItem, SubMenuItem, SubMenuRef,
};
pub use crate::menu::{Bar, BasicMenu, Items, Menu, MenuBar, MenuKind, Popup};
pub use crate::position::ItemPosition;
pub use crate::visitor::{SelectableVisitor, SelectableVisitorMut, Visitor, VisitorMut};

mod description;
mod handle;
mod item;
mod menu;
mod platform_impl;
mod position;
mod visitor;
