//! Smoke tests against the installed BASS libraries.
//!
//! These need the real libraries at link and load time; set `BASS_LIB_DIR`
//! (and the loader path) before running. Device state is process-global in
//! BASS, so everything touching `BASS_Init` lives in one sequential test.
//! Error codes are per-thread, so the other tests stay independent.

use std::ptr;

use bass_sys::*;

#[test]
fn version_reports_2_4() {
    let version = unsafe { BASS_GetVersion() };
    assert_eq!(version >> 16, 0x0204, "unexpected BASS version {:#x}", version);
}

#[test]
fn device_enumeration_works_without_init() {
    // Device 0 is the "no sound" device and always exists.
    let mut info = BASS_DEVICEINFO {
        name: ptr::null(),
        driver: ptr::null(),
        flags: 0,
    };
    let ok = unsafe { BASS_GetDeviceInfo(0, &mut info) };
    assert_eq!(ok, TRUE);
    assert!(!info.name.is_null());
}

#[test]
fn no_sound_device_lifecycle() {
    unsafe {
        // Stream creation before init fails with BASS_ERROR_INIT.
        let chan = BASS_StreamCreateFile(FALSE, c"missing.wav".as_ptr().cast(), 0, 0, 0);
        assert_eq!(chan, 0);
        assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_INIT);

        // The "no sound" device initializes on headless machines too.
        assert_eq!(BASS_Init(0, 44100, 0, ptr::null_mut(), ptr::null()), TRUE);

        // Core and each enabled add-on report a file-open failure for a
        // path that does not exist; this resolves the add-on symbols.
        let chan = BASS_StreamCreateFile(FALSE, c"missing.wav".as_ptr().cast(), 0, 0, 0);
        assert_eq!(chan, 0);
        assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_FILEOPEN);

        #[cfg(feature = "flac")]
        {
            let chan =
                BASS_FLAC_StreamCreateFile(FALSE, c"missing.flac".as_ptr().cast(), 0, 0, 0);
            assert_eq!(chan, 0);
            assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_FILEOPEN);
        }

        #[cfg(feature = "dsd")]
        {
            let chan =
                BASS_DSD_StreamCreateFile(FALSE, c"missing.dsf".as_ptr().cast(), 0, 0, 0, 0);
            assert_eq!(chan, 0);
            assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_FILEOPEN);
        }

        #[cfg(feature = "opus")]
        {
            let chan =
                BASS_OPUS_StreamCreateFile(FALSE, c"missing.opus".as_ptr().cast(), 0, 0, 0);
            assert_eq!(chan, 0);
            assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_FILEOPEN);
        }

        #[cfg(feature = "wv")]
        {
            let chan = BASS_WV_StreamCreateFile(FALSE, c"missing.wv".as_ptr().cast(), 0, 0, 0);
            assert_eq!(chan, 0);
            assert_eq!(BASS_ErrorGetCode(), BASS_ERROR_FILEOPEN);
        }

        assert_eq!(BASS_Free(), TRUE);
    }
}
