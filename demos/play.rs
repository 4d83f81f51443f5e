//! Minimal file player: initialize the default output device, create a
//! stream with the add-on matching the file extension, and play to the end.
//!
//! Usage: `cargo run --example play -- <file>`

use std::ffi::CString;
use std::io::{self, Write};
use std::path::Path;
use std::ptr;
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use bass_sys::*;

/// Pick the stream constructor for a file extension. Formats without an
/// enabled add-on fall through to the core library.
fn create_stream(file: &CString, ext: &str) -> HSTREAM {
    let file = file.as_ptr().cast();
    unsafe {
        match ext {
            #[cfg(feature = "flac")]
            "flac" => BASS_FLAC_StreamCreateFile(FALSE, file, 0, 0, 0),
            #[cfg(feature = "dsd")]
            "dsf" | "dff" => BASS_DSD_StreamCreateFile(FALSE, file, 0, 0, 0, 0),
            #[cfg(feature = "opus")]
            "opus" => BASS_OPUS_StreamCreateFile(FALSE, file, 0, 0, 0),
            #[cfg(feature = "wv")]
            "wv" => BASS_WV_StreamCreateFile(FALSE, file, 0, 0, 0),
            _ => BASS_StreamCreateFile(FALSE, file, 0, 0, 0),
        }
    }
}

fn main() -> Result<()> {
    let path = match std::env::args().nth(1) {
        Some(p) => p,
        None => bail!("usage: play <file>"),
    };
    let ext = Path::new(&path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let cpath = CString::new(path.clone())?;

    unsafe {
        if BASS_Init(-1, 44100, 0, ptr::null_mut(), ptr::null()) == FALSE {
            bail!("BASS_Init failed: error {}", BASS_ErrorGetCode());
        }
    }

    let chan = create_stream(&cpath, &ext);
    if chan == 0 {
        let err = unsafe { BASS_ErrorGetCode() };
        unsafe {
            BASS_Free();
        }
        bail!("cannot play {}: error {}", path, err);
    }

    unsafe {
        BASS_ChannelSetAttribute(chan, BASS_ATTRIB_VOL, 1.0);
        if BASS_ChannelPlay(chan, FALSE) == FALSE {
            bail!("BASS_ChannelPlay failed: error {}", BASS_ErrorGetCode());
        }

        let len = BASS_ChannelGetLength(chan, BASS_POS_BYTE);
        let total = BASS_ChannelBytes2Seconds(chan, len);
        while BASS_ChannelIsActive(chan) != BASS_ACTIVE_STOPPED {
            let pos = BASS_ChannelGetPosition(chan, BASS_POS_BYTE);
            let secs = BASS_ChannelBytes2Seconds(chan, pos);
            print!("\r{:6.1} / {:.1} s", secs, total);
            io::stdout().flush()?;
            thread::sleep(Duration::from_millis(100));
        }
        println!();

        BASS_StreamFree(chan);
        BASS_Free();
    }
    Ok(())
}
