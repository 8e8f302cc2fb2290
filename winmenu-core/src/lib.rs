//! Base types for typed native menus.
//!
//! This crate contains the platform independent vocabulary used by [`winmenu`]: the raw
//! menu reference, the item-information record with its field mask and flags, and the
//! error types. It makes no native calls, which lets alternative backends and other
//! crates speak about menu items without pulling in a windowing system.
//!
//! [`winmenu`]: https://docs.rs/winmenu

pub mod error;
pub mod record;
