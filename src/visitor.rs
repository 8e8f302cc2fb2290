//! Visitors over the typed views of an item.
//!
//! A visitor has one method per item kind and none of them has a default, so a visitor
//! that forgets a kind is rejected at compile time instead of being silently skipped.
//! Visitors that do not care whether a clickable item is a command or a submenu can
//! implement [`SelectableVisitor`] (or [`SelectableVisitorMut`]) instead, which only
//! distinguishes separators from everything else.

use crate::item::{CommandItem, Selectable, SeparatorItem, SubMenuItem};

/// Receives read-only views from [`Item::accept`](crate::Item::accept).
pub trait Visitor {
    type Output;

    fn visit_separator(&mut self, item: &SeparatorItem) -> Self::Output;

    fn visit_command(&mut self, item: &CommandItem) -> Self::Output;

    fn visit_sub_menu(&mut self, item: &SubMenuItem) -> Self::Output;
}

/// Receives mutable views from [`Item::accept_mut`](crate::Item::accept_mut).
pub trait VisitorMut {
    type Output;

    fn visit_separator(&mut self, item: &mut SeparatorItem) -> Self::Output;

    fn visit_command(&mut self, item: &mut CommandItem) -> Self::Output;

    fn visit_sub_menu(&mut self, item: &mut SubMenuItem) -> Self::Output;
}

/// A read-only visitor that handles commands and submenus alike.
///
/// Every `SelectableVisitor` is a [`Visitor`].
pub trait SelectableVisitor {
    type Output;

    fn visit_separator(&mut self, item: &SeparatorItem) -> Self::Output;

    fn visit_selectable(&mut self, item: &dyn Selectable) -> Self::Output;
}

/// A mutating visitor that handles commands and submenus alike.
///
/// Every `SelectableVisitorMut` is a [`VisitorMut`].
pub trait SelectableVisitorMut {
    type Output;

    fn visit_separator(&mut self, item: &mut SeparatorItem) -> Self::Output;

    fn visit_selectable(&mut self, item: &mut dyn Selectable) -> Self::Output;
}

impl<V: SelectableVisitor> Visitor for V {
    type Output = <V as SelectableVisitor>::Output;

    fn visit_separator(&mut self, item: &SeparatorItem) -> <V as SelectableVisitor>::Output {
        SelectableVisitor::visit_separator(self, item)
    }

    fn visit_command(&mut self, item: &CommandItem) -> <V as SelectableVisitor>::Output {
        SelectableVisitor::visit_selectable(self, item)
    }

    fn visit_sub_menu(&mut self, item: &SubMenuItem) -> <V as SelectableVisitor>::Output {
        SelectableVisitor::visit_selectable(self, item)
    }
}

impl<V: SelectableVisitorMut> VisitorMut for V {
    type Output = <V as SelectableVisitorMut>::Output;

    fn visit_separator(
        &mut self,
        item: &mut SeparatorItem,
    ) -> <V as SelectableVisitorMut>::Output {
        SelectableVisitorMut::visit_separator(self, item)
    }

    fn visit_command(&mut self, item: &mut CommandItem) -> <V as SelectableVisitorMut>::Output {
        SelectableVisitorMut::visit_selectable(self, item)
    }

    fn visit_sub_menu(&mut self, item: &mut SubMenuItem) -> <V as SelectableVisitorMut>::Output {
        SelectableVisitorMut::visit_selectable(self, item)
    }
}
