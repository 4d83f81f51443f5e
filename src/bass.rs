//! Core BASS declarations (`bass.h`).
//!
//! A direct transcription of the C header: C names, C layouts, C calling
//! convention. BASS declares its functions `WINAPI` and its callbacks
//! `CALLBACK`, so everything here is `extern "system"`. See the BASS
//! documentation for the semantics of each call.

use core::ffi::{c_char, c_int, c_void};

// ======================== Basic types ========================

pub type DWORD = u32;
pub type QWORD = u64;

/// C-style boolean as BASS uses it: `TRUE` / `FALSE`.
pub type BOOL = c_int;

pub const TRUE: BOOL = 1;
pub const FALSE: BOOL = 0;

/// API version word this binding was written against (2.4).
pub const BASSVERSION: DWORD = 0x204;

pub type HMUSIC = DWORD;
pub type HSAMPLE = DWORD;
pub type HCHANNEL = DWORD;
pub type HSTREAM = DWORD;
pub type HRECORD = DWORD;
pub type HSYNC = DWORD;
pub type HDSP = DWORD;
pub type HFX = DWORD;
pub type HPLUGIN = DWORD;

// ======================== Error codes (BASS_ErrorGetCode) ========================

pub const BASS_OK: c_int = 0;
pub const BASS_ERROR_MEM: c_int = 1;
pub const BASS_ERROR_FILEOPEN: c_int = 2;
pub const BASS_ERROR_DRIVER: c_int = 3;
pub const BASS_ERROR_BUFLOST: c_int = 4;
pub const BASS_ERROR_HANDLE: c_int = 5;
pub const BASS_ERROR_FORMAT: c_int = 6;
pub const BASS_ERROR_POSITION: c_int = 7;
pub const BASS_ERROR_INIT: c_int = 8;
pub const BASS_ERROR_START: c_int = 9;
pub const BASS_ERROR_SSL: c_int = 10;
pub const BASS_ERROR_REUSED: c_int = 11;
pub const BASS_ERROR_ALREADY: c_int = 14;
pub const BASS_ERROR_NOTAUDIO: c_int = 17;
pub const BASS_ERROR_NOCHAN: c_int = 18;
pub const BASS_ERROR_ILLTYPE: c_int = 19;
pub const BASS_ERROR_ILLPARAM: c_int = 20;
pub const BASS_ERROR_NO3D: c_int = 21;
pub const BASS_ERROR_NOEAX: c_int = 22;
pub const BASS_ERROR_DEVICE: c_int = 23;
pub const BASS_ERROR_NOPLAY: c_int = 24;
pub const BASS_ERROR_FREQ: c_int = 25;
pub const BASS_ERROR_NOTFILE: c_int = 27;
pub const BASS_ERROR_NOHW: c_int = 29;
pub const BASS_ERROR_EMPTY: c_int = 31;
pub const BASS_ERROR_NONET: c_int = 32;
pub const BASS_ERROR_CREATE: c_int = 33;
pub const BASS_ERROR_NOFX: c_int = 34;
pub const BASS_ERROR_NOTAVAIL: c_int = 37;
pub const BASS_ERROR_DECODE: c_int = 38;
pub const BASS_ERROR_DX: c_int = 39;
pub const BASS_ERROR_TIMEOUT: c_int = 40;
pub const BASS_ERROR_FILEFORM: c_int = 41;
pub const BASS_ERROR_SPEAKER: c_int = 42;
pub const BASS_ERROR_VERSION: c_int = 43;
pub const BASS_ERROR_CODEC: c_int = 44;
pub const BASS_ERROR_ENDED: c_int = 45;
pub const BASS_ERROR_BUSY: c_int = 46;
pub const BASS_ERROR_UNSTREAMABLE: c_int = 47;
pub const BASS_ERROR_PROTOCOL: c_int = 48;
pub const BASS_ERROR_DENIED: c_int = 49;
pub const BASS_ERROR_UNKNOWN: c_int = -1;

// ======================== Config options (BASS_SetConfig) ========================

pub const BASS_CONFIG_BUFFER: DWORD = 0;
pub const BASS_CONFIG_UPDATEPERIOD: DWORD = 1;
pub const BASS_CONFIG_GVOL_SAMPLE: DWORD = 4;
pub const BASS_CONFIG_GVOL_STREAM: DWORD = 5;
pub const BASS_CONFIG_GVOL_MUSIC: DWORD = 6;
pub const BASS_CONFIG_CURVE_VOL: DWORD = 7;
pub const BASS_CONFIG_CURVE_PAN: DWORD = 8;
pub const BASS_CONFIG_FLOATDSP: DWORD = 9;
pub const BASS_CONFIG_3DALGORITHM: DWORD = 10;
pub const BASS_CONFIG_NET_TIMEOUT: DWORD = 11;
pub const BASS_CONFIG_NET_BUFFER: DWORD = 12;
pub const BASS_CONFIG_PAUSE_NOPLAY: DWORD = 13;
pub const BASS_CONFIG_NET_PREBUF: DWORD = 15;
pub const BASS_CONFIG_NET_PASSIVE: DWORD = 18;
pub const BASS_CONFIG_REC_BUFFER: DWORD = 19;
pub const BASS_CONFIG_NET_PLAYLIST: DWORD = 21;
pub const BASS_CONFIG_MUSIC_VIRTUAL: DWORD = 22;
pub const BASS_CONFIG_VERIFY: DWORD = 23;
pub const BASS_CONFIG_UPDATETHREADS: DWORD = 24;
pub const BASS_CONFIG_DEV_BUFFER: DWORD = 27;
/// iOS only: audio session management.
pub const BASS_CONFIG_IOS_SESSION: DWORD = 34;
pub const BASS_CONFIG_DEV_DEFAULT: DWORD = 36;
pub const BASS_CONFIG_NET_READTIMEOUT: DWORD = 37;
pub const BASS_CONFIG_HANDLES: DWORD = 41;
pub const BASS_CONFIG_SRC: DWORD = 43;
pub const BASS_CONFIG_SRC_SAMPLE: DWORD = 44;
pub const BASS_CONFIG_ASYNCFILE_BUFFER: DWORD = 45;
pub const BASS_CONFIG_OGG_PRESCAN: DWORD = 47;
pub const BASS_CONFIG_DEV_NONSTOP: DWORD = 50;
pub const BASS_CONFIG_VERIFY_NET: DWORD = 52;
pub const BASS_CONFIG_DEV_PERIOD: DWORD = 53;
pub const BASS_CONFIG_FLOAT: DWORD = 54;
pub const BASS_CONFIG_NET_SEEK: DWORD = 56;
pub const BASS_CONFIG_AM_DISABLE: DWORD = 58;
pub const BASS_CONFIG_NET_PLAYLIST_DEPTH: DWORD = 59;
pub const BASS_CONFIG_NET_PREBUF_WAIT: DWORD = 60;
pub const BASS_CONFIG_ANDROID_SESSIONID: DWORD = 62;
pub const BASS_CONFIG_SAMPLE_ONEHANDLE: DWORD = 69;
pub const BASS_CONFIG_NET_META: DWORD = 71;
pub const BASS_CONFIG_NET_RESTRATE: DWORD = 72;
pub const BASS_CONFIG_REC_DEFAULT: DWORD = 73;
pub const BASS_CONFIG_NORAMP: DWORD = 74;

// BASS_SetConfigPtr options
pub const BASS_CONFIG_NET_AGENT: DWORD = 16;
pub const BASS_CONFIG_NET_PROXY: DWORD = 17;

// ======================== Device / init flags ========================

/// Use with functions that take a device option to pass "no device".
pub const BASS_NODEVICE: DWORD = 0x20000;

pub const BASS_DEVICE_8BITS: DWORD = 1;
pub const BASS_DEVICE_MONO: DWORD = 2;
pub const BASS_DEVICE_3D: DWORD = 4;
pub const BASS_DEVICE_16BITS: DWORD = 8;
pub const BASS_DEVICE_REINIT: DWORD = 128;
pub const BASS_DEVICE_LATENCY: DWORD = 0x100;
pub const BASS_DEVICE_CPSPEAKERS: DWORD = 0x400;
pub const BASS_DEVICE_SPEAKERS: DWORD = 0x800;
pub const BASS_DEVICE_NOSPEAKER: DWORD = 0x1000;
pub const BASS_DEVICE_DMIX: DWORD = 0x2000;
pub const BASS_DEVICE_FREQ: DWORD = 0x4000;
pub const BASS_DEVICE_STEREO: DWORD = 0x8000;
pub const BASS_DEVICE_HOG: DWORD = 0x10000;
pub const BASS_DEVICE_AUDIOTRACK: DWORD = 0x20000;
pub const BASS_DEVICE_DSOUND: DWORD = 0x40000;
pub const BASS_DEVICE_SOFTWARE: DWORD = 0x80000;

// BASS_DEVICEINFO flags
pub const BASS_DEVICE_ENABLED: DWORD = 1;
pub const BASS_DEVICE_DEFAULT: DWORD = 2;
pub const BASS_DEVICE_INIT: DWORD = 4;
pub const BASS_DEVICE_LOOPBACK: DWORD = 8;

pub const BASS_DEVICE_TYPE_MASK: DWORD = 0xff000000;
pub const BASS_DEVICE_TYPE_NETWORK: DWORD = 0x01000000;
pub const BASS_DEVICE_TYPE_SPEAKERS: DWORD = 0x02000000;
pub const BASS_DEVICE_TYPE_LINE: DWORD = 0x03000000;
pub const BASS_DEVICE_TYPE_HEADPHONES: DWORD = 0x04000000;
pub const BASS_DEVICE_TYPE_MICROPHONE: DWORD = 0x05000000;
pub const BASS_DEVICE_TYPE_HEADSET: DWORD = 0x06000000;
pub const BASS_DEVICE_TYPE_HANDSET: DWORD = 0x07000000;
pub const BASS_DEVICE_TYPE_DIGITAL: DWORD = 0x08000000;
pub const BASS_DEVICE_TYPE_SPDIF: DWORD = 0x09000000;
pub const BASS_DEVICE_TYPE_HDMI: DWORD = 0x0a000000;
pub const BASS_DEVICE_TYPE_DISPLAYPORT: DWORD = 0x40000000;

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BASS_DEVICEINFO {
    pub name: *const c_char,
    pub driver: *const c_char,
    pub flags: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_INFO {
    pub flags: DWORD,
    pub hwsize: DWORD,
    pub hwfree: DWORD,
    pub freesam: DWORD,
    pub free3d: DWORD,
    pub minrate: DWORD,
    pub maxrate: DWORD,
    pub eax: BOOL,
    pub minbuf: DWORD,
    pub dsver: DWORD,
    pub latency: DWORD,
    pub initflags: DWORD,
    pub speakers: DWORD,
    pub freq: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_RECORDINFO {
    pub flags: DWORD,
    pub formats: DWORD,
    pub inputs: DWORD,
    pub singlein: BOOL,
    pub freq: DWORD,
}

// ======================== Sample / stream / music flags ========================

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_SAMPLE {
    pub freq: DWORD,
    pub volume: f32,
    pub pan: f32,
    pub flags: DWORD,
    pub length: DWORD,
    pub max: DWORD,
    pub origres: DWORD,
    pub chans: DWORD,
    pub mingap: DWORD,
    pub mode3d: DWORD,
    pub mindist: f32,
    pub maxdist: f32,
    pub iangle: DWORD,
    pub oangle: DWORD,
    pub outvol: f32,
    pub vam: DWORD,
    pub priority: DWORD,
}

pub const BASS_SAMPLE_8BITS: DWORD = 1;
pub const BASS_SAMPLE_MONO: DWORD = 2;
pub const BASS_SAMPLE_LOOP: DWORD = 4;
pub const BASS_SAMPLE_3D: DWORD = 8;
pub const BASS_SAMPLE_SOFTWARE: DWORD = 16;
pub const BASS_SAMPLE_MUTEMAX: DWORD = 32;
pub const BASS_SAMPLE_VAM: DWORD = 64;
pub const BASS_SAMPLE_FX: DWORD = 128;
pub const BASS_SAMPLE_FLOAT: DWORD = 256;
pub const BASS_SAMPLE_OVER_VOL: DWORD = 0x10000;
pub const BASS_SAMPLE_OVER_POS: DWORD = 0x20000;
pub const BASS_SAMPLE_OVER_DIST: DWORD = 0x30000;

pub const BASS_STREAM_PRESCAN: DWORD = 0x20000;
pub const BASS_STREAM_AUTOFREE: DWORD = 0x40000;
pub const BASS_STREAM_RESTRATE: DWORD = 0x80000;
pub const BASS_STREAM_BLOCK: DWORD = 0x100000;
pub const BASS_STREAM_DECODE: DWORD = 0x200000;
pub const BASS_STREAM_STATUS: DWORD = 0x800000;

pub const BASS_MP3_IGNOREDELAY: DWORD = 0x200;
pub const BASS_MP3_SETPOS: DWORD = 0x20000;

pub const BASS_MUSIC_FLOAT: DWORD = BASS_SAMPLE_FLOAT;
pub const BASS_MUSIC_MONO: DWORD = BASS_SAMPLE_MONO;
pub const BASS_MUSIC_LOOP: DWORD = BASS_SAMPLE_LOOP;
pub const BASS_MUSIC_3D: DWORD = BASS_SAMPLE_3D;
pub const BASS_MUSIC_FX: DWORD = BASS_SAMPLE_FX;
pub const BASS_MUSIC_AUTOFREE: DWORD = BASS_STREAM_AUTOFREE;
pub const BASS_MUSIC_DECODE: DWORD = BASS_STREAM_DECODE;
/// Calculate the playback length; same value as `BASS_STREAM_PRESCAN`.
pub const BASS_MUSIC_PRESCAN: DWORD = BASS_STREAM_PRESCAN;
pub const BASS_MUSIC_RAMP: DWORD = 0x200;
pub const BASS_MUSIC_RAMPS: DWORD = 0x400;
pub const BASS_MUSIC_SURROUND: DWORD = 0x800;
pub const BASS_MUSIC_SURROUND2: DWORD = 0x1000;
pub const BASS_MUSIC_FT2MOD: DWORD = 0x2000;
pub const BASS_MUSIC_PT1MOD: DWORD = 0x4000;
pub const BASS_MUSIC_POSRESET: DWORD = 0x8000;
pub const BASS_MUSIC_NONINTER: DWORD = 0x10000;
pub const BASS_MUSIC_STOPBACK: DWORD = 0x80000;
pub const BASS_MUSIC_NOSAMPLE: DWORD = 0x100000;
pub const BASS_MUSIC_POSRESETEX: DWORD = 0x400000;
pub const BASS_MUSIC_SINCINTER: DWORD = 0x800000;

// Speaker assignment flags
pub const BASS_SPEAKER_FRONT: DWORD = 0x1000000;
pub const BASS_SPEAKER_REAR: DWORD = 0x2000000;
pub const BASS_SPEAKER_CENLFE: DWORD = 0x3000000;
pub const BASS_SPEAKER_SIDE: DWORD = 0x4000000;
pub const BASS_SPEAKER_LEFT: DWORD = 0x10000000;
pub const BASS_SPEAKER_RIGHT: DWORD = 0x20000000;
pub const BASS_SPEAKER_FRONTLEFT: DWORD = BASS_SPEAKER_FRONT | BASS_SPEAKER_LEFT;
pub const BASS_SPEAKER_FRONTRIGHT: DWORD = BASS_SPEAKER_FRONT | BASS_SPEAKER_RIGHT;
pub const BASS_SPEAKER_REARLEFT: DWORD = BASS_SPEAKER_REAR | BASS_SPEAKER_LEFT;
pub const BASS_SPEAKER_REARRIGHT: DWORD = BASS_SPEAKER_REAR | BASS_SPEAKER_RIGHT;
pub const BASS_SPEAKER_CENTER: DWORD = BASS_SPEAKER_CENLFE | BASS_SPEAKER_LEFT;
pub const BASS_SPEAKER_LFE: DWORD = BASS_SPEAKER_CENLFE | BASS_SPEAKER_RIGHT;
pub const BASS_SPEAKER_SIDELEFT: DWORD = BASS_SPEAKER_SIDE | BASS_SPEAKER_LEFT;
pub const BASS_SPEAKER_SIDERIGHT: DWORD = BASS_SPEAKER_SIDE | BASS_SPEAKER_RIGHT;

pub const BASS_ASYNCFILE: DWORD = 0x40000000;
/// `file` parameters are UTF-16 when set (Windows).
pub const BASS_UNICODE: DWORD = 0x80000000;

pub const BASS_RECORD_PAUSE: DWORD = 0x8000;

pub const BASS_ORIGRES_FLOAT: DWORD = 0x10000;

// BASS_SampleGetChannel flags
pub const BASS_SAMCHAN_NEW: DWORD = 1;
pub const BASS_SAMCHAN_STREAM: DWORD = 2;

// ======================== Channel info / types ========================

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BASS_CHANNELINFO {
    pub freq: DWORD,
    pub chans: DWORD,
    pub flags: DWORD,
    pub ctype: DWORD,
    pub origres: DWORD,
    pub plugin: HPLUGIN,
    pub sample: HSAMPLE,
    pub filename: *const c_char,
}

pub const BASS_CTYPE_SAMPLE: DWORD = 1;
pub const BASS_CTYPE_RECORD: DWORD = 2;
pub const BASS_CTYPE_STREAM: DWORD = 0x10000;
pub const BASS_CTYPE_STREAM_VORBIS: DWORD = 0x10002;
pub const BASS_CTYPE_STREAM_OGG: DWORD = 0x10002;
pub const BASS_CTYPE_STREAM_MP1: DWORD = 0x10003;
pub const BASS_CTYPE_STREAM_MP2: DWORD = 0x10004;
pub const BASS_CTYPE_STREAM_MP3: DWORD = 0x10005;
pub const BASS_CTYPE_STREAM_AIFF: DWORD = 0x10006;
pub const BASS_CTYPE_STREAM_CA: DWORD = 0x10007;
pub const BASS_CTYPE_STREAM_MF: DWORD = 0x10008;
pub const BASS_CTYPE_STREAM_AM: DWORD = 0x10009;
pub const BASS_CTYPE_STREAM_SAMPLE: DWORD = 0x1000a;
pub const BASS_CTYPE_STREAM_DUMMY: DWORD = 0x18000;
pub const BASS_CTYPE_STREAM_DEVICE: DWORD = 0x18001;
/// WAVE flag, LOWORD = codec.
pub const BASS_CTYPE_STREAM_WAV: DWORD = 0x40000;
pub const BASS_CTYPE_STREAM_WAV_PCM: DWORD = 0x50001;
pub const BASS_CTYPE_STREAM_WAV_FLOAT: DWORD = 0x50003;
pub const BASS_CTYPE_MUSIC_MOD: DWORD = 0x20000;
pub const BASS_CTYPE_MUSIC_MTM: DWORD = 0x20001;
pub const BASS_CTYPE_MUSIC_S3M: DWORD = 0x20002;
pub const BASS_CTYPE_MUSIC_XM: DWORD = 0x20003;
pub const BASS_CTYPE_MUSIC_IT: DWORD = 0x20004;
/// MO3 flag.
pub const BASS_CTYPE_MUSIC_MO3: DWORD = 0x00100;

// ======================== Plugins ========================

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BASS_PLUGINFORM {
    pub ctype: DWORD,
    pub name: *const c_char,
    pub exts: *const c_char,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BASS_PLUGININFO {
    pub version: DWORD,
    pub formatc: DWORD,
    pub formats: *const BASS_PLUGINFORM,
}

// ======================== 3D ========================

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BASS_3DVECTOR {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

pub const BASS_3DMODE_NORMAL: DWORD = 0;
pub const BASS_3DMODE_RELATIVE: DWORD = 1;
pub const BASS_3DMODE_OFF: DWORD = 2;

pub const BASS_3DALG_DEFAULT: DWORD = 0;
pub const BASS_3DALG_OFF: DWORD = 1;
pub const BASS_3DALG_FULL: DWORD = 2;
pub const BASS_3DALG_LIGHT: DWORD = 3;

// ======================== Callbacks ========================

/// User stream writer. Return the number of bytes written, optionally
/// OR'd with `BASS_STREAMPROC_END` to signal the end of the stream.
pub type STREAMPROC = Option<
    unsafe extern "system" fn(
        handle: HSTREAM,
        buffer: *mut c_void,
        length: DWORD,
        user: *mut c_void,
    ) -> DWORD,
>;

/// Flag for a `STREAMPROC` return value: end of user stream.
pub const BASS_STREAMPROC_END: DWORD = 0x80000000;

// Special STREAMPROC values; transmute to `STREAMPROC` when passing to
// BASS_StreamCreate (`STREAMPROC_DUMMY` is simply `None`).
pub const STREAMPROC_DUMMY: isize = 0;
pub const STREAMPROC_PUSH: isize = -1;
pub const STREAMPROC_DEVICE: isize = -2;
pub const STREAMPROC_DEVICE_3D: isize = -3;

pub type DOWNLOADPROC = Option<
    unsafe extern "system" fn(buffer: *const c_void, length: DWORD, user: *mut c_void),
>;

pub type SYNCPROC = Option<
    unsafe extern "system" fn(handle: HSYNC, channel: DWORD, data: DWORD, user: *mut c_void),
>;

pub type DSPPROC = Option<
    unsafe extern "system" fn(
        handle: HDSP,
        channel: DWORD,
        buffer: *mut c_void,
        length: DWORD,
        user: *mut c_void,
    ),
>;

/// Recording callback. Return `FALSE` to stop recording.
pub type RECORDPROC = Option<
    unsafe extern "system" fn(
        handle: HRECORD,
        buffer: *const c_void,
        length: DWORD,
        user: *mut c_void,
    ) -> BOOL,
>;

pub type FILECLOSEPROC = Option<unsafe extern "system" fn(user: *mut c_void)>;
pub type FILELENPROC = Option<unsafe extern "system" fn(user: *mut c_void) -> QWORD>;
pub type FILEREADPROC = Option<
    unsafe extern "system" fn(buffer: *mut c_void, length: DWORD, user: *mut c_void) -> DWORD,
>;
pub type FILESEEKPROC =
    Option<unsafe extern "system" fn(offset: QWORD, user: *mut c_void) -> BOOL>;

#[repr(C)]
#[derive(Clone, Copy)]
pub struct BASS_FILEPROCS {
    pub close: FILECLOSEPROC,
    pub length: FILELENPROC,
    pub read: FILEREADPROC,
    pub seek: FILESEEKPROC,
}

// BASS_StreamCreateFileUser file systems
pub const STREAMFILE_NOBUFFER: DWORD = 0;
pub const STREAMFILE_BUFFER: DWORD = 1;
pub const STREAMFILE_BUFFERPUSH: DWORD = 2;

/// BASS_StreamPutFileData option: end the file.
pub const BASS_FILEDATA_END: DWORD = 0;

// BASS_StreamGetFilePosition modes
pub const BASS_FILEPOS_CURRENT: DWORD = 0;
pub const BASS_FILEPOS_DOWNLOAD: DWORD = 1;
pub const BASS_FILEPOS_END: DWORD = 2;
pub const BASS_FILEPOS_START: DWORD = 3;
pub const BASS_FILEPOS_CONNECTED: DWORD = 4;
pub const BASS_FILEPOS_BUFFER: DWORD = 5;
pub const BASS_FILEPOS_SOCKET: DWORD = 6;
pub const BASS_FILEPOS_ASYNCBUF: DWORD = 7;
pub const BASS_FILEPOS_SIZE: DWORD = 8;
pub const BASS_FILEPOS_BUFFERING: DWORD = 9;

// ======================== Channel state / attributes / position ========================

// BASS_ChannelIsActive return values
pub const BASS_ACTIVE_STOPPED: DWORD = 0;
pub const BASS_ACTIVE_PLAYING: DWORD = 1;
pub const BASS_ACTIVE_STALLED: DWORD = 2;
pub const BASS_ACTIVE_PAUSED: DWORD = 3;
pub const BASS_ACTIVE_PAUSED_DEVICE: DWORD = 4;

// Channel attributes
pub const BASS_ATTRIB_FREQ: DWORD = 1;
pub const BASS_ATTRIB_VOL: DWORD = 2;
pub const BASS_ATTRIB_PAN: DWORD = 3;
pub const BASS_ATTRIB_EAXMIX: DWORD = 4;
pub const BASS_ATTRIB_NOBUFFER: DWORD = 5;
pub const BASS_ATTRIB_VBR: DWORD = 6;
pub const BASS_ATTRIB_CPU: DWORD = 7;
pub const BASS_ATTRIB_SRC: DWORD = 8;
pub const BASS_ATTRIB_NET_RESUME: DWORD = 9;
pub const BASS_ATTRIB_SCANINFO: DWORD = 10;
pub const BASS_ATTRIB_NORAMP: DWORD = 11;
pub const BASS_ATTRIB_BITRATE: DWORD = 12;
pub const BASS_ATTRIB_BUFFER: DWORD = 13;
pub const BASS_ATTRIB_GRANULE: DWORD = 14;
pub const BASS_ATTRIB_USER: DWORD = 15;
pub const BASS_ATTRIB_TAIL: DWORD = 16;
pub const BASS_ATTRIB_PUSH_LIMIT: DWORD = 17;
pub const BASS_ATTRIB_DOWNLOADPROC: DWORD = 18;
pub const BASS_ATTRIB_VOLDSP: DWORD = 19;
pub const BASS_ATTRIB_VOLDSP_PRIORITY: DWORD = 20;
pub const BASS_ATTRIB_MUSIC_AMPLIFY: DWORD = 0x100;
pub const BASS_ATTRIB_MUSIC_PANSEP: DWORD = 0x101;
pub const BASS_ATTRIB_MUSIC_PSCALER: DWORD = 0x102;
pub const BASS_ATTRIB_MUSIC_BPM: DWORD = 0x103;
pub const BASS_ATTRIB_MUSIC_SPEED: DWORD = 0x104;
pub const BASS_ATTRIB_MUSIC_VOL_GLOBAL: DWORD = 0x105;
pub const BASS_ATTRIB_MUSIC_ACTIVE: DWORD = 0x106;
/// + channel number
pub const BASS_ATTRIB_MUSIC_VOL_CHAN: DWORD = 0x200;
/// + instrument number
pub const BASS_ATTRIB_MUSIC_VOL_INST: DWORD = 0x300;

/// BASS_ChannelSlideAttribute flag: logarithmic slide.
pub const BASS_SLIDE_LOG: DWORD = 0x1000000;

// BASS_ChannelGetLength / GetPosition / SetPosition modes
pub const BASS_POS_BYTE: DWORD = 0;
pub const BASS_POS_MUSIC_ORDER: DWORD = 1;
pub const BASS_POS_OGG: DWORD = 3;
pub const BASS_POS_END: DWORD = 0x10;
pub const BASS_POS_LOOP: DWORD = 0x11;
pub const BASS_POS_FLUSH: DWORD = 0x1000000;
pub const BASS_POS_RESET: DWORD = 0x2000000;
pub const BASS_POS_RELATIVE: DWORD = 0x4000000;
pub const BASS_POS_INEXACT: DWORD = 0x8000000;
pub const BASS_POS_DECODE: DWORD = 0x10000000;
pub const BASS_POS_DECODETO: DWORD = 0x20000000;
pub const BASS_POS_SCAN: DWORD = 0x40000000;

// BASS_ChannelSetSync types
pub const BASS_SYNC_POS: DWORD = 0;
pub const BASS_SYNC_MUSICINST: DWORD = 1;
pub const BASS_SYNC_END: DWORD = 2;
pub const BASS_SYNC_MUSICFX: DWORD = 3;
pub const BASS_SYNC_META: DWORD = 4;
pub const BASS_SYNC_SLIDE: DWORD = 5;
pub const BASS_SYNC_STALL: DWORD = 6;
pub const BASS_SYNC_DOWNLOAD: DWORD = 7;
pub const BASS_SYNC_FREE: DWORD = 8;
pub const BASS_SYNC_MUSICPOS: DWORD = 10;
pub const BASS_SYNC_SETPOS: DWORD = 11;
pub const BASS_SYNC_OGG_CHANGE: DWORD = 12;
pub const BASS_SYNC_DEV_FAIL: DWORD = 14;
pub const BASS_SYNC_DEV_FORMAT: DWORD = 15;
/// Flag: call the sync in its own thread.
pub const BASS_SYNC_THREAD: DWORD = 0x20000000;
/// Flag: call the sync at mix time instead of playback time.
pub const BASS_SYNC_MIXTIME: DWORD = 0x40000000;
/// Flag: one-shot sync, removed after the first trigger.
pub const BASS_SYNC_ONETIME: DWORD = 0x80000000;

// BASS_ChannelGetData flags
pub const BASS_DATA_AVAILABLE: DWORD = 0;
pub const BASS_DATA_NOREMOVE: DWORD = 0x10000000;
pub const BASS_DATA_FIXED: DWORD = 0x20000000;
pub const BASS_DATA_FLOAT: DWORD = 0x40000000;
pub const BASS_DATA_FFT256: DWORD = 0x80000000;
pub const BASS_DATA_FFT512: DWORD = 0x80000001;
pub const BASS_DATA_FFT1024: DWORD = 0x80000002;
pub const BASS_DATA_FFT2048: DWORD = 0x80000003;
pub const BASS_DATA_FFT4096: DWORD = 0x80000004;
pub const BASS_DATA_FFT8192: DWORD = 0x80000005;
pub const BASS_DATA_FFT16384: DWORD = 0x80000006;
pub const BASS_DATA_FFT32768: DWORD = 0x80000007;
pub const BASS_DATA_FFT_INDIVIDUAL: DWORD = 0x10;
pub const BASS_DATA_FFT_NOWINDOW: DWORD = 0x20;
pub const BASS_DATA_FFT_REMOVEDC: DWORD = 0x40;
pub const BASS_DATA_FFT_COMPLEX: DWORD = 0x80;
pub const BASS_DATA_FFT_NYQUIST: DWORD = 0x100;

// BASS_ChannelGetLevelEx flags
pub const BASS_LEVEL_MONO: DWORD = 1;
pub const BASS_LEVEL_STEREO: DWORD = 2;
pub const BASS_LEVEL_RMS: DWORD = 4;
pub const BASS_LEVEL_VOLPAN: DWORD = 8;
pub const BASS_LEVEL_NOREMOVE: DWORD = 16;

// ======================== Tags ========================

pub const BASS_TAG_ID3: DWORD = 0;
pub const BASS_TAG_ID3V2: DWORD = 1;
pub const BASS_TAG_OGG: DWORD = 2;
pub const BASS_TAG_HTTP: DWORD = 3;
pub const BASS_TAG_ICY: DWORD = 4;
pub const BASS_TAG_META: DWORD = 5;
pub const BASS_TAG_APE: DWORD = 6;
pub const BASS_TAG_MP4: DWORD = 7;
pub const BASS_TAG_VENDOR: DWORD = 9;
pub const BASS_TAG_LYRICS3: DWORD = 10;
pub const BASS_TAG_CA_CODEC: DWORD = 11;
pub const BASS_TAG_MF: DWORD = 13;
pub const BASS_TAG_WAVEFORMAT: DWORD = 14;
pub const BASS_TAG_RIFF_INFO: DWORD = 0x100;
pub const BASS_TAG_RIFF_BEXT: DWORD = 0x101;
pub const BASS_TAG_RIFF_CART: DWORD = 0x102;
pub const BASS_TAG_RIFF_DISP: DWORD = 0x103;
pub const BASS_TAG_APE_BINARY: DWORD = 0x1000;
pub const BASS_TAG_MUSIC_NAME: DWORD = 0x10000;
pub const BASS_TAG_MUSIC_MESSAGE: DWORD = 0x10001;
pub const BASS_TAG_MUSIC_ORDERS: DWORD = 0x10002;
pub const BASS_TAG_MUSIC_AUTH: DWORD = 0x10003;
/// + instrument number
pub const BASS_TAG_MUSIC_INST: DWORD = 0x10100;
/// + sample number
pub const BASS_TAG_MUSIC_SAMPLE: DWORD = 0x10300;

// ======================== DX8 effects ========================

pub const BASS_FX_DX8_CHORUS: DWORD = 0;
pub const BASS_FX_DX8_COMPRESSOR: DWORD = 1;
pub const BASS_FX_DX8_DISTORTION: DWORD = 2;
pub const BASS_FX_DX8_ECHO: DWORD = 3;
pub const BASS_FX_DX8_FLANGER: DWORD = 4;
pub const BASS_FX_DX8_GARGLE: DWORD = 5;
pub const BASS_FX_DX8_I3DL2REVERB: DWORD = 6;
pub const BASS_FX_DX8_PARAMEQ: DWORD = 7;
pub const BASS_FX_DX8_REVERB: DWORD = 8;
pub const BASS_FX_VOLUME: DWORD = 9;

pub const BASS_DX8_PHASE_NEG_180: DWORD = 0;
pub const BASS_DX8_PHASE_NEG_90: DWORD = 1;
pub const BASS_DX8_PHASE_ZERO: DWORD = 2;
pub const BASS_DX8_PHASE_90: DWORD = 3;
pub const BASS_DX8_PHASE_180: DWORD = 4;

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_CHORUS {
    pub fWetDryMix: f32,
    pub fDepth: f32,
    pub fFeedback: f32,
    pub fFrequency: f32,
    pub lWaveform: DWORD,
    pub fDelay: f32,
    pub lPhase: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_COMPRESSOR {
    pub fGain: f32,
    pub fAttack: f32,
    pub fRelease: f32,
    pub fThreshold: f32,
    pub fRatio: f32,
    pub fPredelay: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_DISTORTION {
    pub fGain: f32,
    pub fEdge: f32,
    pub fPostEQCenterFrequency: f32,
    pub fPostEQBandwidth: f32,
    pub fPreLowpassCutoff: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_ECHO {
    pub fWetDryMix: f32,
    pub fFeedback: f32,
    pub fLeftDelay: f32,
    pub fRightDelay: f32,
    pub lPanDelay: BOOL,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_FLANGER {
    pub fWetDryMix: f32,
    pub fDepth: f32,
    pub fFeedback: f32,
    pub fFrequency: f32,
    pub lWaveform: DWORD,
    pub fDelay: f32,
    pub lPhase: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_GARGLE {
    pub dwRateHz: DWORD,
    pub dwWaveShape: DWORD,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_I3DL2REVERB {
    pub lRoom: c_int,
    pub lRoomHF: c_int,
    pub flRoomRolloffFactor: f32,
    pub flDecayTime: f32,
    pub flDecayHFRatio: f32,
    pub lReflections: c_int,
    pub flReflectionsDelay: f32,
    pub lReverb: c_int,
    pub flReverbDelay: f32,
    pub flDiffusion: f32,
    pub flDensity: f32,
    pub flHFReference: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_PARAMEQ {
    pub fCenter: f32,
    pub fBandwidth: f32,
    pub fGain: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_DX8_REVERB {
    pub fInGain: f32,
    pub fReverbMix: f32,
    pub fReverbTime: f32,
    pub fHighFreqRTRatio: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct BASS_FX_VOLUME_PARAM {
    pub fTarget: f32,
    pub fCurrent: f32,
    pub fTime: f32,
    pub lCurve: DWORD,
}

// ======================== Functions ========================

unsafe extern "system" {
    // Config
    pub fn BASS_SetConfig(option: DWORD, value: DWORD) -> BOOL;
    pub fn BASS_GetConfig(option: DWORD) -> DWORD;
    pub fn BASS_SetConfigPtr(option: DWORD, value: *const c_void) -> BOOL;
    pub fn BASS_GetConfigPtr(option: DWORD) -> *const c_void;

    /// Returns the loaded library version, e.g. 0x02041100 for 2.4.17.
    pub fn BASS_GetVersion() -> DWORD;
    /// Error status of the most recent BASS call on the current thread.
    pub fn BASS_ErrorGetCode() -> c_int;

    // Device setup and output control
    pub fn BASS_GetDeviceInfo(device: DWORD, info: *mut BASS_DEVICEINFO) -> BOOL;
    pub fn BASS_Init(
        device: c_int,
        freq: DWORD,
        flags: DWORD,
        win: *mut c_void,
        dsguid: *const c_void,
    ) -> BOOL;
    pub fn BASS_Free() -> BOOL;
    pub fn BASS_SetDevice(device: DWORD) -> BOOL;
    pub fn BASS_GetDevice() -> DWORD;
    pub fn BASS_GetInfo(info: *mut BASS_INFO) -> BOOL;
    pub fn BASS_Start() -> BOOL;
    pub fn BASS_Stop() -> BOOL;
    pub fn BASS_Pause() -> BOOL;
    pub fn BASS_IsStarted() -> DWORD;
    pub fn BASS_Update(length: DWORD) -> BOOL;
    pub fn BASS_GetCPU() -> f32;
    pub fn BASS_SetVolume(volume: f32) -> BOOL;
    pub fn BASS_GetVolume() -> f32;

    // Plugins
    pub fn BASS_PluginLoad(file: *const c_char, flags: DWORD) -> HPLUGIN;
    pub fn BASS_PluginFree(handle: HPLUGIN) -> BOOL;
    pub fn BASS_PluginEnable(handle: HPLUGIN, enable: BOOL) -> BOOL;
    pub fn BASS_PluginGetInfo(handle: HPLUGIN) -> *const BASS_PLUGININFO;

    // 3D
    pub fn BASS_Set3DFactors(distf: f32, rollf: f32, doppf: f32) -> BOOL;
    pub fn BASS_Get3DFactors(distf: *mut f32, rollf: *mut f32, doppf: *mut f32) -> BOOL;
    pub fn BASS_Set3DPosition(
        pos: *const BASS_3DVECTOR,
        vel: *const BASS_3DVECTOR,
        front: *const BASS_3DVECTOR,
        top: *const BASS_3DVECTOR,
    ) -> BOOL;
    pub fn BASS_Get3DPosition(
        pos: *mut BASS_3DVECTOR,
        vel: *mut BASS_3DVECTOR,
        front: *mut BASS_3DVECTOR,
        top: *mut BASS_3DVECTOR,
    ) -> BOOL;
    /// Apply pending 3D changes from the `Set3D*` family.
    pub fn BASS_Apply3D();

    // Samples
    pub fn BASS_SampleLoad(
        mem: BOOL,
        file: *const c_void,
        offset: QWORD,
        length: DWORD,
        max: DWORD,
        flags: DWORD,
    ) -> HSAMPLE;
    pub fn BASS_SampleCreate(
        length: DWORD,
        freq: DWORD,
        chans: DWORD,
        max: DWORD,
        flags: DWORD,
    ) -> HSAMPLE;
    pub fn BASS_SampleFree(handle: HSAMPLE) -> BOOL;
    pub fn BASS_SampleSetData(handle: HSAMPLE, buffer: *const c_void) -> BOOL;
    pub fn BASS_SampleGetData(handle: HSAMPLE, buffer: *mut c_void) -> BOOL;
    pub fn BASS_SampleGetInfo(handle: HSAMPLE, info: *mut BASS_SAMPLE) -> BOOL;
    pub fn BASS_SampleSetInfo(handle: HSAMPLE, info: *const BASS_SAMPLE) -> BOOL;
    pub fn BASS_SampleGetChannel(handle: HSAMPLE, flags: DWORD) -> DWORD;
    pub fn BASS_SampleGetChannels(handle: HSAMPLE, channels: *mut HCHANNEL) -> DWORD;
    pub fn BASS_SampleStop(handle: HSAMPLE) -> BOOL;

    // Streams
    pub fn BASS_StreamCreate(
        freq: DWORD,
        chans: DWORD,
        flags: DWORD,
        proc_: STREAMPROC,
        user: *mut c_void,
    ) -> HSTREAM;
    /// `file` is a `*const c_char` path, or UTF-16 with `BASS_UNICODE`,
    /// or a memory pointer with `mem = TRUE`.
    pub fn BASS_StreamCreateFile(
        mem: BOOL,
        file: *const c_void,
        offset: QWORD,
        length: QWORD,
        flags: DWORD,
    ) -> HSTREAM;
    pub fn BASS_StreamCreateURL(
        url: *const c_char,
        offset: DWORD,
        flags: DWORD,
        proc_: DOWNLOADPROC,
        user: *mut c_void,
    ) -> HSTREAM;
    pub fn BASS_StreamCreateFileUser(
        system: DWORD,
        flags: DWORD,
        proc_: *const BASS_FILEPROCS,
        user: *mut c_void,
    ) -> HSTREAM;
    pub fn BASS_StreamFree(handle: HSTREAM) -> BOOL;
    pub fn BASS_StreamGetFilePosition(handle: HSTREAM, mode: DWORD) -> QWORD;
    pub fn BASS_StreamPutData(handle: HSTREAM, buffer: *const c_void, length: DWORD) -> DWORD;
    pub fn BASS_StreamPutFileData(
        handle: HSTREAM,
        buffer: *const c_void,
        length: DWORD,
    ) -> DWORD;

    // MOD music
    pub fn BASS_MusicLoad(
        mem: BOOL,
        file: *const c_void,
        offset: QWORD,
        length: DWORD,
        flags: DWORD,
        freq: DWORD,
    ) -> HMUSIC;
    pub fn BASS_MusicFree(handle: HMUSIC) -> BOOL;

    // Recording
    pub fn BASS_RecordGetDeviceInfo(device: DWORD, info: *mut BASS_DEVICEINFO) -> BOOL;
    pub fn BASS_RecordInit(device: c_int) -> BOOL;
    pub fn BASS_RecordFree() -> BOOL;
    pub fn BASS_RecordSetDevice(device: DWORD) -> BOOL;
    pub fn BASS_RecordGetDevice() -> DWORD;
    pub fn BASS_RecordGetInfo(info: *mut BASS_RECORDINFO) -> BOOL;
    pub fn BASS_RecordGetInputName(input: c_int) -> *const c_char;
    pub fn BASS_RecordSetInput(input: c_int, flags: DWORD, volume: f32) -> BOOL;
    pub fn BASS_RecordGetInput(input: c_int, volume: *mut f32) -> DWORD;
    /// HIWORD of `flags` is the update period in milliseconds.
    pub fn BASS_RecordStart(
        freq: DWORD,
        chans: DWORD,
        flags: DWORD,
        proc_: RECORDPROC,
        user: *mut c_void,
    ) -> HRECORD;

    // Channels (streams, MOD musics, samples, recordings)
    pub fn BASS_ChannelBytes2Seconds(handle: DWORD, pos: QWORD) -> f64;
    pub fn BASS_ChannelSeconds2Bytes(handle: DWORD, pos: f64) -> QWORD;
    pub fn BASS_ChannelGetDevice(handle: DWORD) -> DWORD;
    pub fn BASS_ChannelSetDevice(handle: DWORD, device: DWORD) -> BOOL;
    pub fn BASS_ChannelIsActive(handle: DWORD) -> DWORD;
    pub fn BASS_ChannelGetInfo(handle: DWORD, info: *mut BASS_CHANNELINFO) -> BOOL;
    /// Returns tag data whose layout depends on the tag type, or null.
    pub fn BASS_ChannelGetTags(handle: DWORD, tags: DWORD) -> *const c_char;
    pub fn BASS_ChannelFlags(handle: DWORD, flags: DWORD, mask: DWORD) -> DWORD;
    pub fn BASS_ChannelLock(handle: DWORD, lock: BOOL) -> BOOL;
    pub fn BASS_ChannelFree(handle: DWORD) -> BOOL;
    pub fn BASS_ChannelPlay(handle: DWORD, restart: BOOL) -> BOOL;
    pub fn BASS_ChannelStart(handle: DWORD) -> BOOL;
    pub fn BASS_ChannelStop(handle: DWORD) -> BOOL;
    pub fn BASS_ChannelPause(handle: DWORD) -> BOOL;
    pub fn BASS_ChannelUpdate(handle: DWORD, length: DWORD) -> BOOL;
    pub fn BASS_ChannelSetAttribute(handle: DWORD, attrib: DWORD, value: f32) -> BOOL;
    pub fn BASS_ChannelGetAttribute(handle: DWORD, attrib: DWORD, value: *mut f32) -> BOOL;
    pub fn BASS_ChannelSlideAttribute(
        handle: DWORD,
        attrib: DWORD,
        value: f32,
        time: DWORD,
    ) -> BOOL;
    pub fn BASS_ChannelIsSliding(handle: DWORD, attrib: DWORD) -> BOOL;
    pub fn BASS_ChannelSetAttributeEx(
        handle: DWORD,
        attrib: DWORD,
        value: *mut c_void,
        size: DWORD,
    ) -> BOOL;
    pub fn BASS_ChannelGetAttributeEx(
        handle: DWORD,
        attrib: DWORD,
        value: *mut c_void,
        size: DWORD,
    ) -> DWORD;
    pub fn BASS_ChannelSet3DAttributes(
        handle: DWORD,
        mode: c_int,
        min: f32,
        max: f32,
        iangle: c_int,
        oangle: c_int,
        outvol: f32,
    ) -> BOOL;
    pub fn BASS_ChannelGet3DAttributes(
        handle: DWORD,
        mode: *mut DWORD,
        min: *mut f32,
        max: *mut f32,
        iangle: *mut DWORD,
        oangle: *mut DWORD,
        outvol: *mut f32,
    ) -> BOOL;
    pub fn BASS_ChannelSet3DPosition(
        handle: DWORD,
        pos: *const BASS_3DVECTOR,
        orient: *const BASS_3DVECTOR,
        vel: *const BASS_3DVECTOR,
    ) -> BOOL;
    pub fn BASS_ChannelGet3DPosition(
        handle: DWORD,
        pos: *mut BASS_3DVECTOR,
        orient: *mut BASS_3DVECTOR,
        vel: *mut BASS_3DVECTOR,
    ) -> BOOL;
    pub fn BASS_ChannelGetLength(handle: DWORD, mode: DWORD) -> QWORD;
    pub fn BASS_ChannelSetPosition(handle: DWORD, pos: QWORD, mode: DWORD) -> BOOL;
    pub fn BASS_ChannelGetPosition(handle: DWORD, mode: DWORD) -> QWORD;
    /// LOWORD = left level, HIWORD = right level.
    pub fn BASS_ChannelGetLevel(handle: DWORD) -> DWORD;
    pub fn BASS_ChannelGetLevelEx(
        handle: DWORD,
        levels: *mut f32,
        length: f32,
        flags: DWORD,
    ) -> BOOL;
    pub fn BASS_ChannelGetData(handle: DWORD, buffer: *mut c_void, length: DWORD) -> DWORD;
    pub fn BASS_ChannelSetSync(
        handle: DWORD,
        type_: DWORD,
        param: QWORD,
        proc_: SYNCPROC,
        user: *mut c_void,
    ) -> HSYNC;
    pub fn BASS_ChannelRemoveSync(handle: DWORD, sync: HSYNC) -> BOOL;
    pub fn BASS_ChannelSetDSP(
        handle: DWORD,
        proc_: DSPPROC,
        user: *mut c_void,
        priority: c_int,
    ) -> HDSP;
    pub fn BASS_ChannelRemoveDSP(handle: DWORD, dsp: HDSP) -> BOOL;
    pub fn BASS_ChannelSetLink(handle: DWORD, chan: DWORD) -> BOOL;
    pub fn BASS_ChannelRemoveLink(handle: DWORD, chan: DWORD) -> BOOL;
    pub fn BASS_ChannelSetFX(handle: DWORD, type_: DWORD, priority: c_int) -> HFX;
    pub fn BASS_ChannelRemoveFX(handle: DWORD, fx: HFX) -> BOOL;

    // Effects
    pub fn BASS_FXSetParameters(handle: HFX, params: *const c_void) -> BOOL;
    pub fn BASS_FXGetParameters(handle: HFX, params: *mut c_void) -> BOOL;
    pub fn BASS_FXReset(handle: HFX) -> BOOL;
    pub fn BASS_FXSetPriority(handle: HFX, priority: c_int) -> BOOL;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::size_of;

    #[test]
    fn version_word_matches_header() {
        assert_eq!(BASSVERSION, 0x204);
    }

    // Sizes must match what the C compiler produces for bass.h, otherwise
    // out-params get written past the end of our structs.
    #[test]
    #[cfg(target_pointer_width = "64")]
    fn struct_layouts_match_c() {
        assert_eq!(size_of::<BASS_DEVICEINFO>(), 24);
        assert_eq!(size_of::<BASS_INFO>(), 56);
        assert_eq!(size_of::<BASS_RECORDINFO>(), 20);
        assert_eq!(size_of::<BASS_SAMPLE>(), 68);
        assert_eq!(size_of::<BASS_CHANNELINFO>(), 40);
        assert_eq!(size_of::<BASS_PLUGININFO>(), 16);
        assert_eq!(size_of::<BASS_3DVECTOR>(), 12);
        assert_eq!(size_of::<BASS_FILEPROCS>(), 32);
    }

    #[test]
    fn speaker_flags_compose() {
        assert_eq!(BASS_SPEAKER_FRONTLEFT, BASS_SPEAKER_FRONT | BASS_SPEAKER_LEFT);
        assert_eq!(BASS_SPEAKER_REARRIGHT, BASS_SPEAKER_REAR | BASS_SPEAKER_RIGHT);
        assert_eq!(BASS_SPEAKER_LFE, BASS_SPEAKER_CENLFE | BASS_SPEAKER_RIGHT);
    }

    #[test]
    fn music_flags_alias_shared_values() {
        assert_eq!(BASS_MUSIC_FLOAT, BASS_SAMPLE_FLOAT);
        assert_eq!(BASS_MUSIC_PRESCAN, BASS_STREAM_PRESCAN);
        assert_eq!(BASS_MUSIC_AUTOFREE, BASS_STREAM_AUTOFREE);
    }
}
