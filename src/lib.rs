//! Raw FFI bindings to the BASS audio library and its codec add-ons.
//!
//! Everything the native libraries export is re-exported flat from the
//! crate root with its C name, so code reads like the C API:
//!
//! ```no_run
//! use std::ptr;
//! use bass_sys::*;
//!
//! unsafe {
//!     if BASS_Init(-1, 44100, 0, ptr::null_mut(), ptr::null()) == FALSE {
//!         panic!("BASS_Init failed: error {}", BASS_ErrorGetCode());
//!     }
//!     let chan = BASS_StreamCreateFile(FALSE, c"track.flac".as_ptr().cast(), 0, 0, 0);
//!     BASS_ChannelPlay(chan, FALSE);
//! }
//! ```
//!
//! # Features
//!
//! Each codec add-on is an independent feature controlling both its
//! declarations and its link directive:
//!
//! - `flac` (default): FLAC / Ogg FLAC (`libbassflac`)
//! - `dsd` (default): Direct Stream Digital (`libbassdsd`)
//! - `opus` (default): Opus (`libbassopus`)
//! - `wv`: WavPack (`libbasswv`), off by default
//!
//! # Linking
//!
//! The libraries are a commercial download (<https://www.un4seen.com/>) and
//! are not bundled. Point `BASS_LIB_DIR` at the directory holding
//! `libbass.*` and the enabled add-ons, or install them on the system
//! linker path. A missing library surfaces as a link error.

#![allow(non_camel_case_types, non_snake_case)]
#![allow(clippy::missing_safety_doc)]

mod bass;
pub use bass::*;

#[cfg(feature = "flac")]
mod flac;
#[cfg(feature = "flac")]
pub use flac::*;

#[cfg(feature = "dsd")]
mod dsd;
#[cfg(feature = "dsd")]
pub use dsd::*;

#[cfg(feature = "opus")]
mod opus;
#[cfg(feature = "opus")]
pub use opus::*;

#[cfg(feature = "wv")]
mod wv;
#[cfg(feature = "wv")]
pub use wv::*;
