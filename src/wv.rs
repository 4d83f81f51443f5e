//! WavPack add-on declarations (`basswv.h`).
//!
//! Behind the non-default `wv` feature: the binding is complete, but the
//! library is not part of the default link set yet.

use core::ffi::{c_char, c_void};

use crate::bass::{BASS_FILEPROCS, BOOL, DOWNLOADPROC, DWORD, HSTREAM, QWORD};

pub const BASS_CTYPE_STREAM_WV: DWORD = 0x10500;

unsafe extern "system" {
    pub fn BASS_WV_StreamCreateFile(
        mem: BOOL,
        file: *const c_void,
        offset: QWORD,
        length: QWORD,
        flags: DWORD,
    ) -> HSTREAM;
    pub fn BASS_WV_StreamCreateURL(
        url: *const c_char,
        offset: DWORD,
        flags: DWORD,
        proc_: DOWNLOADPROC,
        user: *mut c_void,
    ) -> HSTREAM;
    pub fn BASS_WV_StreamCreateFileUser(
        system: DWORD,
        flags: DWORD,
        proc_: *const BASS_FILEPROCS,
        user: *mut c_void,
    ) -> HSTREAM;
}
