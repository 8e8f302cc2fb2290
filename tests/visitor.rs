//! These tests only check that the right visitor method fires for each kind of item.

use winmenu::{
    BasicMenu, CommandDescription, CommandItem, FieldMask, ItemMut, ItemRecord, ItemRef,
    ItemState, ItemType, Menu, MenuKind, Selectable, SelectableVisitor, SelectableVisitorMut,
    SeparatorDescription, SeparatorItem, SubMenuDescription, SubMenuItem, Visitor, VisitorMut,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Case {
    Separator,
    Command,
    SubMenu,
    ConstSeparator,
    ConstCommand,
    ConstSubMenu,
}

/// Mutable-only visitor reporting which method fired.
struct TestVisitor(Case);

impl VisitorMut for TestVisitor {
    type Output = &'static str;

    fn visit_separator(&mut self, _: &mut SeparatorItem) -> &'static str {
        assert_eq!(self.0, Case::Separator);
        "separator"
    }

    fn visit_command(&mut self, _: &mut CommandItem) -> &'static str {
        assert_eq!(self.0, Case::Command);
        "command"
    }

    fn visit_sub_menu(&mut self, _: &mut SubMenuItem) -> &'static str {
        assert_eq!(self.0, Case::SubMenu);
        "sub_menu"
    }
}

/// Mutable-only visitor with no result.
struct VoidTestVisitor(Case);

impl VisitorMut for VoidTestVisitor {
    type Output = ();

    fn visit_separator(&mut self, _: &mut SeparatorItem) {
        assert_eq!(self.0, Case::Separator);
    }

    fn visit_command(&mut self, _: &mut CommandItem) {
        assert_eq!(self.0, Case::Command);
    }

    fn visit_sub_menu(&mut self, _: &mut SubMenuItem) {
        assert_eq!(self.0, Case::SubMenu);
    }
}

/// Read-only visitor with no result.
struct ConstVoidTestVisitor(Case);

impl Visitor for ConstVoidTestVisitor {
    type Output = ();

    fn visit_separator(&mut self, _: &SeparatorItem) {
        assert_eq!(self.0, Case::ConstSeparator);
    }

    fn visit_command(&mut self, _: &CommandItem) {
        assert_eq!(self.0, Case::ConstCommand);
    }

    fn visit_sub_menu(&mut self, _: &SubMenuItem) {
        assert_eq!(self.0, Case::ConstSubMenu);
    }
}

/// Visitor offering both read-only and mutable methods.
struct ConstAndNonConstTestVisitor(Case);

impl Visitor for ConstAndNonConstTestVisitor {
    type Output = ();

    fn visit_separator(&mut self, _: &SeparatorItem) {
        assert_eq!(self.0, Case::ConstSeparator);
    }

    fn visit_command(&mut self, _: &CommandItem) {
        assert_eq!(self.0, Case::ConstCommand);
    }

    fn visit_sub_menu(&mut self, _: &SubMenuItem) {
        assert_eq!(self.0, Case::ConstSubMenu);
    }
}

impl VisitorMut for ConstAndNonConstTestVisitor {
    type Output = ();

    fn visit_separator(&mut self, _: &mut SeparatorItem) {
        assert_eq!(self.0, Case::Separator);
    }

    fn visit_command(&mut self, _: &mut CommandItem) {
        assert_eq!(self.0, Case::Command);
    }

    fn visit_sub_menu(&mut self, _: &mut SubMenuItem) {
        assert_eq!(self.0, Case::SubMenu);
    }
}

/// Treats commands and submenus alike.
struct SemiInheritanceTestVisitor(Case);

impl SelectableVisitor for SemiInheritanceTestVisitor {
    type Output = &'static str;

    fn visit_separator(&mut self, _: &SeparatorItem) -> &'static str {
        assert_eq!(self.0, Case::Separator);
        "separator"
    }

    fn visit_selectable(&mut self, _: &dyn Selectable) -> &'static str {
        assert!(matches!(self.0, Case::Command | Case::SubMenu));
        "command-or-sub_menu"
    }
}

fn catch_all(view: ItemRef<'_>) -> &'static str {
    match view {
        ItemRef::Separator(_) => "separator",
        _ => "catch-all",
    }
}

fn menu_with_separator<K: MenuKind>() -> BasicMenu<K> {
    let mut menu = BasicMenu::<K>::new().unwrap();
    menu.insert(SeparatorDescription::new()).unwrap();
    menu
}

fn menu_with_command<K: MenuKind>() -> BasicMenu<K> {
    let mut menu = BasicMenu::<K>::new().unwrap();
    menu.insert(CommandDescription::new("Bob", 42)).unwrap();
    menu
}

fn menu_with_sub_menu<K: MenuKind>() -> BasicMenu<K> {
    let mut sub_menu = Menu::new().unwrap();
    sub_menu.insert(CommandDescription::new("Pop", 7)).unwrap();

    let mut menu = BasicMenu::<K>::new().unwrap();
    menu.insert(SubMenuDescription::new("Bob", sub_menu)).unwrap();
    menu
}

fn visit_separator<K: MenuKind>() {
    let menu = menu_with_separator::<K>();

    assert_eq!(menu.get(0).unwrap().accept_mut(TestVisitor(Case::Separator)).unwrap(), "separator");
    menu.get(0).unwrap().accept_mut(VoidTestVisitor(Case::Separator)).unwrap();
    assert_eq!(menu.get(0).unwrap().visit(catch_all).unwrap(), "separator");
    assert_eq!(
        menu.get(0).unwrap().accept(SemiInheritanceTestVisitor(Case::Separator)).unwrap(),
        "separator"
    );
}

fn visit_separator_const_correctness<K: MenuKind>() {
    let menu = menu_with_separator::<K>();
    let item = menu.get(0).unwrap();
    let shared = &item;

    // Shared items accept a visitor that only gives access to read-only views.
    shared.accept(ConstVoidTestVisitor(Case::ConstSeparator)).unwrap();

    // A visitor with both flavours only has its read-only methods called.
    shared.accept(ConstAndNonConstTestVisitor(Case::ConstSeparator)).unwrap();

    // Mutable items are equally happy with a read-only visitor.
    let mut item = menu.get(0).unwrap();
    item.accept(ConstVoidTestVisitor(Case::ConstSeparator)).unwrap();
    item.accept_mut(ConstAndNonConstTestVisitor(Case::Separator)).unwrap();
}

fn visit_command<K: MenuKind>() {
    let menu = menu_with_command::<K>();

    assert_eq!(menu.get(0).unwrap().accept_mut(TestVisitor(Case::Command)).unwrap(), "command");
    menu.get(0).unwrap().accept_mut(VoidTestVisitor(Case::Command)).unwrap();
    assert_eq!(menu.get(0).unwrap().visit(catch_all).unwrap(), "catch-all");
    assert_eq!(
        menu.get(0).unwrap().accept(SemiInheritanceTestVisitor(Case::Command)).unwrap(),
        "command-or-sub_menu"
    );
}

fn visit_command_const_correctness<K: MenuKind>() {
    let menu = menu_with_command::<K>();
    let item = menu.get(0).unwrap();
    let shared = &item;

    shared.accept(ConstVoidTestVisitor(Case::ConstCommand)).unwrap();
    shared.accept(ConstAndNonConstTestVisitor(Case::ConstCommand)).unwrap();

    let mut item = menu.get(0).unwrap();
    item.accept(ConstVoidTestVisitor(Case::ConstCommand)).unwrap();
    item.accept_mut(ConstAndNonConstTestVisitor(Case::Command)).unwrap();
}

fn visit_sub_menu<K: MenuKind>() {
    let menu = menu_with_sub_menu::<K>();

    assert_eq!(menu.get(0).unwrap().accept_mut(TestVisitor(Case::SubMenu)).unwrap(), "sub_menu");
    menu.get(0).unwrap().accept_mut(VoidTestVisitor(Case::SubMenu)).unwrap();
    assert_eq!(menu.get(0).unwrap().visit(catch_all).unwrap(), "catch-all");
    assert_eq!(
        menu.get(0).unwrap().accept(SemiInheritanceTestVisitor(Case::SubMenu)).unwrap(),
        "command-or-sub_menu"
    );
}

fn visit_sub_menu_const_correctness<K: MenuKind>() {
    let menu = menu_with_sub_menu::<K>();
    let item = menu.get(0).unwrap();
    let shared = &item;

    shared.accept(ConstVoidTestVisitor(Case::ConstSubMenu)).unwrap();
    shared.accept(ConstAndNonConstTestVisitor(Case::ConstSubMenu)).unwrap();

    let mut item = menu.get(0).unwrap();
    item.accept(ConstVoidTestVisitor(Case::ConstSubMenu)).unwrap();
    item.accept_mut(ConstAndNonConstTestVisitor(Case::SubMenu)).unwrap();
}

macro_rules! for_each_menu_kind {
    ($($name:ident),* $(,)?) => {
        mod popup {
            $(
                #[test]
                fn $name() {
                    super::$name::<winmenu::Popup>();
                }
            )*
        }

        mod bar {
            $(
                #[test]
                fn $name() {
                    super::$name::<winmenu::Bar>();
                }
            )*
        }
    };
}

for_each_menu_kind!(
    visit_separator,
    visit_separator_const_correctness,
    visit_command,
    visit_command_const_correctness,
    visit_sub_menu,
    visit_sub_menu_const_correctness,
);

#[test]
fn command_exposes_its_identifier() {
    let menu = menu_with_command::<winmenu::Popup>();
    let id = menu
        .get(0)
        .unwrap()
        .visit(|view| match view {
            ItemRef::Command(item) => item.id().unwrap(),
            other => panic!("expected a command, got {other:?}"),
        })
        .unwrap();
    assert_eq!(id, 42);
}

#[test]
fn sub_menu_exposes_its_nested_menu() {
    let menu = menu_with_sub_menu::<winmenu::Bar>();
    let nested_id = menu
        .get(0)
        .unwrap()
        .visit(|view| {
            let ItemRef::SubMenu(item) = view else { panic!("expected a submenu, got {view:?}") };
            let nested = item.menu().unwrap();
            assert_eq!(nested.len().unwrap(), 1);
            assert!(!nested.handle().is_owned());
            let first = nested.get(0).unwrap();
            let id = first
                .visit(|view| match view {
                    ItemRef::Command(item) => item.id().unwrap(),
                    other => panic!("expected a command, got {other:?}"),
                })
                .unwrap();
            id
        })
        .unwrap();
    assert_eq!(nested_id, 7);
}

#[test]
fn classification_is_never_memoized() {
    let menu = menu_with_command::<winmenu::Popup>();
    let mut item = menu.get(0).unwrap();
    assert_eq!(item.visit(catch_all).unwrap(), "catch-all");

    let separator =
        ItemRecord { item_type: ItemType::SEPARATOR, ..ItemRecord::with_mask(FieldMask::TYPE) };
    item.position_mut().set_record(&separator).unwrap();
    assert_eq!(item.visit(catch_all).unwrap(), "separator");

    let command = ItemRecord::with_mask(FieldMask::TYPE);
    item.position_mut().set_record(&command).unwrap();
    assert_eq!(item.visit(catch_all).unwrap(), "catch-all");
}

#[test]
fn separator_flag_hides_a_sub_menu() {
    let menu = menu_with_sub_menu::<winmenu::Popup>();
    let mut item = menu.get(0).unwrap();

    let separator =
        ItemRecord { item_type: ItemType::SEPARATOR, ..ItemRecord::with_mask(FieldMask::TYPE) };
    item.position_mut().set_record(&separator).unwrap();

    // The native item still references its submenu...
    assert!(item.position().get_record(FieldMask::SUB_MENU).unwrap().sub_menu.is_some());
    // ...but only the separator method fires.
    assert_eq!(item.accept_mut(TestVisitor(Case::Separator)).unwrap(), "separator");
    item.accept(ConstVoidTestVisitor(Case::ConstSeparator)).unwrap();
}

#[test]
fn only_mutable_views_rewrite_their_record() {
    struct ReadState;

    impl Visitor for ReadState {
        type Output = Option<ItemState>;

        fn visit_separator(&mut self, _: &SeparatorItem) -> Option<ItemState> {
            None
        }

        fn visit_command(&mut self, item: &CommandItem) -> Option<ItemState> {
            Some(item.position().get_record(FieldMask::STATE).unwrap().state)
        }

        fn visit_sub_menu(&mut self, _: &SubMenuItem) -> Option<ItemState> {
            None
        }
    }

    struct Retype;

    impl VisitorMut for Retype {
        type Output = ();

        fn visit_separator(&mut self, _: &mut SeparatorItem) {}

        fn visit_command(&mut self, item: &mut CommandItem) {
            let separator = ItemRecord {
                item_type: ItemType::SEPARATOR,
                ..ItemRecord::with_mask(FieldMask::TYPE)
            };
            item.position_mut().set_record(&separator).unwrap();
        }

        fn visit_sub_menu(&mut self, _: &mut SubMenuItem) {}
    }

    let menu = menu_with_command::<winmenu::Popup>();
    let mut item = menu.get(0).unwrap();

    // Reading through a shared item leaves it as it was.
    let shared = &item;
    assert_eq!(shared.accept(ReadState).unwrap(), Some(ItemState::empty()));
    assert_eq!(shared.visit(catch_all).unwrap(), "catch-all");

    item.accept_mut(Retype).unwrap();
    assert_eq!(item.visit(catch_all).unwrap(), "separator");
    assert_eq!(item.accept(ReadState).unwrap(), None);
}

#[test]
fn mutable_views_write_through() {
    struct Disable;

    impl SelectableVisitorMut for Disable {
        type Output = bool;

        fn visit_separator(&mut self, _: &mut SeparatorItem) -> bool {
            false
        }

        fn visit_selectable(&mut self, item: &mut dyn Selectable) -> bool {
            item.set_selectability(winmenu::Selectability::Disabled).unwrap();
            true
        }
    }

    let mut menu = Menu::new().unwrap();
    menu.insert(CommandDescription::new("Bob", 42)).unwrap();
    menu.insert(SeparatorDescription::new()).unwrap();

    let touched: Vec<bool> =
        menu.iter().map(|mut item| item.accept_mut(Disable).unwrap()).collect();
    assert_eq!(touched, [true, false]);

    let selectable = menu
        .get(0)
        .unwrap()
        .visit(|view| view.as_selectable().map(|item| item.is_selectable().unwrap()))
        .unwrap();
    assert_eq!(selectable, Some(false));
}

#[test]
fn visit_mut_groups_selectables() {
    let mut menu = menu_with_sub_menu::<winmenu::Popup>();
    menu.insert(SeparatorDescription::new()).unwrap();

    for mut item in &menu {
        item.visit_mut(|view| {
            if let Some(item) = view.into_selectable() {
                item.set_check_mark(winmenu::CheckMark::Checked).unwrap();
            }
        })
        .unwrap();
    }

    let checked = menu
        .get(0)
        .unwrap()
        .visit(|view| {
            matches!(view, ItemRef::SubMenu(item) if item.check_mark_is_visible().unwrap())
        })
        .unwrap();
    assert!(checked);
    let is_separator =
        menu.get(1).unwrap().visit_mut(|view| matches!(view, ItemMut::Separator(_))).unwrap();
    assert!(is_separator);
}

#[test]
fn unreadable_item_dispatches_nothing() {
    let menu = Menu::new().unwrap();
    let borrowed = Menu::from_handle(menu.handle().to_borrowed());
    let mut menu = menu;
    menu.insert(SeparatorDescription::new()).unwrap();
    let item = borrowed.get(0).unwrap();
    drop(menu);

    let err = item.visit(|_| panic!("no view should be built")).unwrap_err();
    assert!(err.is_invalid_handle());
}
