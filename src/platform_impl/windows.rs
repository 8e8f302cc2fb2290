//! Win32 menu primitives.
//!
//! All item access is by position. `MENUITEMINFOW` is only ever filled with the members
//! selected by the caller's mask, so untouched members of the native item keep their
//! values on write.

use std::{io, mem, ptr};

use tracing::trace;
use windows_sys::Win32::Foundation::{BOOL, TRUE};
use windows_sys::Win32::UI::WindowsAndMessaging::{
    CreateMenu, CreatePopupMenu, DestroyMenu, GetMenuItemCount, GetMenuItemInfoW, HMENU,
    InsertMenuItemW, IsMenu, MENUITEMINFOW, MENU_ITEM_MASK, MENU_ITEM_STATE, MENU_ITEM_TYPE,
    MFS_CHECKED, MFS_DEFAULT, MFS_DISABLED, MFS_HILITE, MFT_MENUBARBREAK, MFT_MENUBREAK,
    MFT_RADIOCHECK, MFT_RIGHTJUSTIFY, MFT_SEPARATOR, MIIM_FTYPE, MIIM_ID, MIIM_STATE,
    MIIM_STRING, MIIM_SUBMENU, SetMenuItemInfoW,
};
use winmenu_core::error::MenuError;
use winmenu_core::os_error;
use winmenu_core::record::{FieldMask, ItemRecord, ItemState, ItemType, RawMenu};

const TYPE_FLAGS: [(ItemType, MENU_ITEM_TYPE); 5] = [
    (ItemType::SEPARATOR, MFT_SEPARATOR),
    (ItemType::RADIO_CHECK, MFT_RADIOCHECK),
    (ItemType::RIGHT_JUSTIFY, MFT_RIGHTJUSTIFY),
    (ItemType::MENU_BREAK, MFT_MENUBREAK),
    (ItemType::MENU_BAR_BREAK, MFT_MENUBARBREAK),
];

const STATE_FLAGS: [(ItemState, MENU_ITEM_STATE); 4] = [
    (ItemState::DISABLED, MFS_DISABLED),
    (ItemState::CHECKED, MFS_CHECKED),
    (ItemState::HIGHLIGHTED, MFS_HILITE),
    (ItemState::DEFAULT, MFS_DEFAULT),
];

/// `InsertMenuItemW` position meaning "after the last item".
const APPEND: u32 = u32::MAX;

fn hmenu(menu: RawMenu) -> HMENU {
    menu.get() as HMENU
}

fn raw_menu(handle: HMENU) -> Option<RawMenu> {
    RawMenu::new(handle as usize)
}

fn native_mask(mask: FieldMask) -> MENU_ITEM_MASK {
    let mut native = 0;
    if mask.contains(FieldMask::TYPE) {
        native |= MIIM_FTYPE;
    }
    if mask.contains(FieldMask::STATE) {
        native |= MIIM_STATE;
    }
    if mask.contains(FieldMask::ID) {
        native |= MIIM_ID;
    }
    if mask.contains(FieldMask::SUB_MENU) {
        native |= MIIM_SUBMENU;
    }
    if mask.contains(FieldMask::TEXT) {
        native |= MIIM_STRING;
    }
    native
}

fn native_type(item_type: ItemType) -> MENU_ITEM_TYPE {
    TYPE_FLAGS.iter().filter(|(flag, _)| item_type.contains(*flag)).fold(0, |acc, (_, n)| acc | n)
}

fn item_type(native: MENU_ITEM_TYPE) -> ItemType {
    TYPE_FLAGS
        .iter()
        .filter(|(_, n)| native & n == *n)
        .fold(ItemType::empty(), |acc, (flag, _)| acc | *flag)
}

fn native_state(state: ItemState) -> MENU_ITEM_STATE {
    STATE_FLAGS.iter().filter(|(flag, _)| state.contains(*flag)).fold(0, |acc, (_, n)| acc | n)
}

fn item_state(native: MENU_ITEM_STATE) -> ItemState {
    STATE_FLAGS
        .iter()
        .filter(|(_, n)| native & n == *n)
        .fold(ItemState::empty(), |acc, (flag, _)| acc | *flag)
}

fn empty_info(mask: MENU_ITEM_MASK) -> MENUITEMINFOW {
    let mut info: MENUITEMINFOW = unsafe { mem::zeroed() };
    info.cbSize = mem::size_of::<MENUITEMINFOW>() as u32;
    info.fMask = mask;
    info
}

fn encode_wide(string: &str) -> Vec<u16> {
    string.encode_utf16().chain(Some(0)).collect()
}

fn native_position(menu: RawMenu, index: usize) -> Result<u32, MenuError> {
    u32::try_from(index).map_err(|_| MenuError::OutOfRange {
        index,
        len: item_count(menu).unwrap_or_default(),
    })
}

/// Work out why a by-position item call failed.
fn item_failure(menu: RawMenu, index: usize, error: io::Error) -> MenuError {
    match item_count(menu) {
        Err(err) => err,
        Ok(len) if index >= len => MenuError::OutOfRange { index, len },
        Ok(_) => os_error!(error).into(),
    }
}

fn win_to_err(result: BOOL) -> Result<(), io::Error> {
    if result != 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

pub(crate) fn create_menu() -> Result<RawMenu, MenuError> {
    let raw = raw_menu(unsafe { CreateMenu() })
        .ok_or_else(|| os_error!(io::Error::last_os_error()))?;
    trace!("created menu bar {raw:?}");
    Ok(raw)
}

pub(crate) fn create_popup_menu() -> Result<RawMenu, MenuError> {
    let raw = raw_menu(unsafe { CreatePopupMenu() })
        .ok_or_else(|| os_error!(io::Error::last_os_error()))?;
    trace!("created popup menu {raw:?}");
    Ok(raw)
}

pub(crate) fn destroy_menu(menu: RawMenu) -> Result<(), MenuError> {
    if !is_menu(menu) {
        return Err(MenuError::InvalidHandle);
    }
    win_to_err(unsafe { DestroyMenu(hmenu(menu)) }).map_err(|err| os_error!(err).into())
}

pub(crate) fn is_menu(menu: RawMenu) -> bool {
    unsafe { IsMenu(hmenu(menu)) != 0 }
}

pub(crate) fn item_count(menu: RawMenu) -> Result<usize, MenuError> {
    let count = unsafe { GetMenuItemCount(hmenu(menu)) };
    match usize::try_from(count) {
        Ok(count) => Ok(count),
        Err(_) if !is_menu(menu) => Err(MenuError::InvalidHandle),
        Err(_) => Err(os_error!(io::Error::last_os_error()).into()),
    }
}

pub(crate) fn get_item(
    menu: RawMenu,
    index: usize,
    mask: FieldMask,
) -> Result<ItemRecord, MenuError> {
    let position = native_position(menu, index)?;

    // The text needs a second call once its length is known.
    let mut info = empty_info(native_mask(mask));
    win_to_err(unsafe { GetMenuItemInfoW(hmenu(menu), position, TRUE, &mut info) })
        .map_err(|err| item_failure(menu, index, err))?;

    let text = if mask.contains(FieldMask::TEXT) && info.cch > 0 {
        let mut buffer = vec![0u16; info.cch as usize + 1];
        let mut text_info = empty_info(MIIM_STRING);
        text_info.dwTypeData = buffer.as_mut_ptr();
        text_info.cch = buffer.len() as u32;
        win_to_err(unsafe { GetMenuItemInfoW(hmenu(menu), position, TRUE, &mut text_info) })
            .map_err(|err| item_failure(menu, index, err))?;
        buffer.truncate(text_info.cch as usize);
        Some(String::from_utf16_lossy(&buffer))
    } else {
        None
    };

    Ok(ItemRecord {
        mask,
        item_type: item_type(info.fType),
        state: item_state(info.fState),
        id: info.wID,
        sub_menu: raw_menu(info.hSubMenu),
        text,
    }
    .masked(mask))
}

/// Fill a `MENUITEMINFOW` from `record`.
///
/// The returned buffer backs `dwTypeData` and must outlive every use of the info.
fn fill_info(record: &ItemRecord) -> (MENUITEMINFOW, Option<Vec<u16>>) {
    let mut info = empty_info(native_mask(record.mask));
    info.fType = native_type(record.item_type);
    info.fState = native_state(record.state);
    info.wID = record.id;
    info.hSubMenu = record.sub_menu.map_or(ptr::null_mut(), hmenu);

    let mut text = None;
    if record.mask.contains(FieldMask::TEXT) {
        let buffer = text.insert(encode_wide(record.text.as_deref().unwrap_or_default()));
        info.dwTypeData = buffer.as_mut_ptr();
        info.cch = (buffer.len() - 1) as u32;
    }
    (info, text)
}

pub(crate) fn set_item(menu: RawMenu, index: usize, record: &ItemRecord) -> Result<(), MenuError> {
    let position = native_position(menu, index)?;
    let len = item_count(menu)?;
    if index >= len {
        return Err(MenuError::OutOfRange { index, len });
    }

    let (info, _text) = fill_info(record);
    win_to_err(unsafe { SetMenuItemInfoW(hmenu(menu), position, TRUE, &info) })
        .map_err(|err| item_failure(menu, index, err))
}

pub(crate) fn insert_item(
    menu: RawMenu,
    index: Option<usize>,
    record: &ItemRecord,
) -> Result<(), MenuError> {
    let position = match index {
        Some(index) => native_position(menu, index)?,
        None => APPEND,
    };

    let (info, _text) = fill_info(record);
    win_to_err(unsafe { InsertMenuItemW(hmenu(menu), position, TRUE, &info) }).map_err(|err| {
        if is_menu(menu) {
            os_error!(err).into()
        } else {
            MenuError::InvalidHandle
        }
    })?;
    trace!("inserted item into {menu:?} at {index:?}");
    Ok(())
}
