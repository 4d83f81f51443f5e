//! List the available BASS output devices.
//!
//! Device 0 is the "no sound" device; 1 is usually the system default.

use std::ffi::CStr;
use std::ptr;

use bass_sys::*;

fn main() {
    let mut device: DWORD = 0;
    loop {
        let mut info = BASS_DEVICEINFO {
            name: ptr::null(),
            driver: ptr::null(),
            flags: 0,
        };
        if unsafe { BASS_GetDeviceInfo(device, &mut info) } == FALSE {
            break;
        }
        let name = if info.name.is_null() {
            String::from("?")
        } else {
            unsafe { CStr::from_ptr(info.name) }
                .to_string_lossy()
                .into_owned()
        };
        let mut state = Vec::new();
        if info.flags & BASS_DEVICE_ENABLED != 0 {
            state.push("enabled");
        }
        if info.flags & BASS_DEVICE_DEFAULT != 0 {
            state.push("default");
        }
        if info.flags & BASS_DEVICE_INIT != 0 {
            state.push("init");
        }
        println!("{:2}: {} [{}]", device, name, state.join(", "));
        device += 1;
    }
}
