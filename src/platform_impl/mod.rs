//! Native menu primitives.
//!
//! Every backend exposes the same set of free functions:
//!
//! - `create_menu` / `create_popup_menu` / `destroy_menu` / `is_menu`
//! - `item_count`
//! - `get_item` / `set_item` / `insert_item`
//!
//! Items are always addressed by zero-based position. Nothing here caches native state.

#[cfg(headless_platform)]
mod headless;
#[cfg(windows_platform)]
mod windows;

#[cfg(headless_platform)]
use self::headless as platform;
#[cfg(windows_platform)]
use self::windows as platform;

pub(crate) use self::platform::*;

#[cfg(all(not(windows_platform), not(headless_platform)))]
compile_error!("The platform you're compiling for is not supported by winmenu");
