//! In-process menu store for hosts without a native menu subsystem.
//!
//! Menus live in a thread-local table keyed by handle value, which mirrors the thread
//! affinity of native menus. Handle values are never reused, so a destroyed menu stays
//! invalid for as long as anyone still holds its handle. Destroying a menu also destroys
//! every submenu attached to it, as the native implementation does.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::trace;
use winmenu_core::error::MenuError;
use winmenu_core::os_error;
use winmenu_core::record::{FieldMask, ItemRecord, ItemState, ItemType, RawMenu};

const FIRST_HANDLE: usize = 0x1000;
const HANDLE_STRIDE: usize = 0x10;

thread_local! {
    static STORE: RefCell<Store> = RefCell::new(Store::new());
}

#[derive(Debug, Default, Clone)]
struct NativeItem {
    item_type: ItemType,
    state: ItemState,
    id: u32,
    sub_menu: Option<RawMenu>,
    text: Option<String>,
}

impl NativeItem {
    fn from_record(record: &ItemRecord) -> Self {
        let mut item = Self::default();
        item.apply(record);
        item
    }

    fn apply(&mut self, record: &ItemRecord) {
        let mask = record.mask;
        if mask.contains(FieldMask::TYPE) {
            self.item_type = record.item_type;
        }
        if mask.contains(FieldMask::STATE) {
            self.state = record.state;
        }
        if mask.contains(FieldMask::ID) {
            self.id = record.id;
        }
        if mask.contains(FieldMask::SUB_MENU) {
            self.sub_menu = record.sub_menu;
        }
        if mask.contains(FieldMask::TEXT) {
            self.text = record.text.clone();
        }
    }

    fn to_record(&self, mask: FieldMask) -> ItemRecord {
        ItemRecord {
            mask: FieldMask::all(),
            item_type: self.item_type,
            state: self.state,
            id: self.id,
            sub_menu: self.sub_menu,
            text: self.text.clone().filter(|text| !text.is_empty()),
        }
        .masked(mask)
    }
}

#[derive(Debug)]
struct NativeMenu {
    is_bar: bool,
    items: Vec<NativeItem>,
}

#[derive(Debug)]
struct Store {
    next_handle: usize,
    menus: HashMap<RawMenu, NativeMenu>,
}

impl Store {
    fn new() -> Self {
        Self { next_handle: FIRST_HANDLE, menus: HashMap::new() }
    }

    fn create(&mut self, is_bar: bool) -> Result<RawMenu, MenuError> {
        let raw = RawMenu::new(self.next_handle)
            .ok_or_else(|| os_error!("menu handle space exhausted"))?;
        self.next_handle = self.next_handle.wrapping_add(HANDLE_STRIDE);
        self.menus.insert(raw, NativeMenu { is_bar, items: Vec::new() });
        Ok(raw)
    }

    fn destroy(&mut self, menu: RawMenu) -> Result<(), MenuError> {
        let native = self.menus.remove(&menu).ok_or(MenuError::InvalidHandle)?;
        for sub_menu in native.items.iter().filter_map(|item| item.sub_menu) {
            // The child may already have been torn down through another parent.
            let _ = self.destroy(sub_menu);
        }
        Ok(())
    }

    fn menu(&self, menu: RawMenu) -> Result<&NativeMenu, MenuError> {
        self.menus.get(&menu).ok_or(MenuError::InvalidHandle)
    }

    fn menu_mut(&mut self, menu: RawMenu) -> Result<&mut NativeMenu, MenuError> {
        self.menus.get_mut(&menu).ok_or(MenuError::InvalidHandle)
    }

    /// Rejects records referencing a submenu that does not exist.
    fn check_sub_menu(&self, record: &ItemRecord) -> Result<(), MenuError> {
        match record.sub_menu {
            Some(sub_menu) if record.mask.contains(FieldMask::SUB_MENU) => {
                self.menu(sub_menu).map(|_| ())
            },
            _ => Ok(()),
        }
    }
}

fn with_store<T>(f: impl FnOnce(&mut Store) -> T) -> T {
    STORE.with(|store| f(&mut store.borrow_mut()))
}

pub(crate) fn create_menu() -> Result<RawMenu, MenuError> {
    let raw = with_store(|store| store.create(true))?;
    trace!("created headless menu bar {raw:?}");
    Ok(raw)
}

pub(crate) fn create_popup_menu() -> Result<RawMenu, MenuError> {
    let raw = with_store(|store| store.create(false))?;
    trace!("created headless popup menu {raw:?}");
    Ok(raw)
}

pub(crate) fn destroy_menu(menu: RawMenu) -> Result<(), MenuError> {
    with_store(|store| store.destroy(menu))
}

pub(crate) fn is_menu(menu: RawMenu) -> bool {
    with_store(|store| store.menus.contains_key(&menu))
}

pub(crate) fn item_count(menu: RawMenu) -> Result<usize, MenuError> {
    with_store(|store| store.menu(menu).map(|native| native.items.len()))
}

pub(crate) fn get_item(
    menu: RawMenu,
    index: usize,
    mask: FieldMask,
) -> Result<ItemRecord, MenuError> {
    with_store(|store| {
        let native = store.menu(menu)?;
        let len = native.items.len();
        let item = native.items.get(index).ok_or(MenuError::OutOfRange { index, len })?;
        Ok(item.to_record(mask))
    })
}

pub(crate) fn set_item(menu: RawMenu, index: usize, record: &ItemRecord) -> Result<(), MenuError> {
    with_store(|store| {
        store.check_sub_menu(record)?;
        let native = store.menu_mut(menu)?;
        let len = native.items.len();
        let item = native.items.get_mut(index).ok_or(MenuError::OutOfRange { index, len })?;
        item.apply(record);
        Ok(())
    })
}

pub(crate) fn insert_item(
    menu: RawMenu,
    index: Option<usize>,
    record: &ItemRecord,
) -> Result<(), MenuError> {
    with_store(|store| {
        store.check_sub_menu(record)?;
        let native = store.menu_mut(menu)?;
        let item = NativeItem::from_record(record);
        match index {
            Some(index) if index < native.items.len() => native.items.insert(index, item),
            _ => native.items.push(item),
        }
        trace!(
            "inserted item into headless {} {menu:?}",
            if native.is_bar { "menu bar" } else { "popup menu" }
        );
        Ok(())
    })
}
