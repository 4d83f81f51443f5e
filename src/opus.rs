//! OPUS add-on declarations (`bassopus.h`).
//!
//! Adds Opus decoding. Opus output is always 48 kHz; the original encoding
//! sample rate is available via `BASS_ATTRIB_OPUS_ORIGFREQ`.

use core::ffi::{c_char, c_void};

use crate::bass::{BASS_FILEPROCS, BOOL, DOWNLOADPROC, DWORD, HSTREAM, QWORD};

pub const BASS_CTYPE_STREAM_OPUS: DWORD = 0x11200;

/// Original sample rate from the OpusHead packet; read-only.
pub const BASS_ATTRIB_OPUS_ORIGFREQ: DWORD = 0x13000;
/// Output gain from the OpusHead packet (dB).
pub const BASS_ATTRIB_OPUS_GAIN: DWORD = 0x13001;

unsafe extern "system" {
    pub fn BASS_OPUS_StreamCreateFile(
        mem: BOOL,
        file: *const c_void,
        offset: QWORD,
        length: QWORD,
        flags: DWORD,
    ) -> HSTREAM;
    pub fn BASS_OPUS_StreamCreateURL(
        url: *const c_char,
        offset: DWORD,
        flags: DWORD,
        proc_: DOWNLOADPROC,
        user: *mut c_void,
    ) -> HSTREAM;
    pub fn BASS_OPUS_StreamCreateFileUser(
        system: DWORD,
        flags: DWORD,
        proc_: *const BASS_FILEPROCS,
        user: *mut c_void,
    ) -> HSTREAM;
}
