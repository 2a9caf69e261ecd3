//! Provide entropy from the operating system.

/// Fills `buf` with bytes from the entropy source of the platform.
fn fill(buf: &mut [u8]) {
    #[cfg(target_arch = "wasm32")]
    {
        for b in buf {
            *b = (js_sys::Math::random() * 256.0) as u8;
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(err) = getrandom::getrandom(buf) {
            nk_log::warning!("failed to read system entropy: {err}");
        }
    }
}

/// Returns a random `u64` value.
///
/// # Remarks
///
/// If the system fails to provide entropy, a warning is logged and the value is derived from
/// whatever ended up in the buffer, which is not guaranteed to be unpredictable.
pub fn entropy() -> u64 {
    let mut bytes = [0u8; 8];
    fill(&mut bytes);
    crate::utility::splitmix64(u64::from_ne_bytes(bytes))
}
