// FFI functions are unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// fonema-ffi: C-compatible FFI layer for Transcriber.
//
// Memory management rules:
// - Opaque `Transcriber` pointer: created by `fonema_new`, freed by `fonema_free`.
// - Returned strings and error strings: caller must free with `fonema_free_str`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use fonema_core::Locale;
use fonema_es::{StressMarks, Transcriber, TranscriberOptions, TranscriptionError};

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new transcriber.
///
/// - `locale`: `"es_ES"` or `"es_MX"`; NULL selects `es_ES`
/// - `fold_stress`: non-zero to return plain vowels instead of stress placeholders
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `fonema_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_new(
    locale: *const c_char,
    fold_stress: c_int,
    error_out: *mut *mut c_char,
) -> *mut Transcriber {
    let locale = if locale.is_null() {
        Locale::default()
    } else {
        let Some(tag) = cstr_to_str(locale) else {
            set_error(error_out, "locale is not valid UTF-8");
            return ptr::null_mut();
        };
        match Locale::from_tag(tag) {
            Ok(locale) => locale,
            Err(e) => {
                set_error(error_out, &e.to_string());
                return ptr::null_mut();
            }
        }
    };

    let stress_marks = if fold_stress != 0 {
        StressMarks::Fold
    } else {
        StressMarks::Keep
    };

    Box::into_raw(Box::new(Transcriber::new(TranscriberOptions {
        locale,
        stress_marks,
    })))
}

/// Free a transcriber created by `fonema_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_free(handle: *mut Transcriber) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Transcription ───────────────────────────────────────────────

/// Transcribe one word with the handle's locale.
///
/// Returns a heap-allocated C string (free with `fonema_free_str`), or NULL
/// if the word has no Latin letters. On NULL, `error_out` (if non-NULL)
/// receives the reason.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_transcribe(
    handle: *const Transcriber,
    word: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let Some(word) = cstr_to_str(word) else {
        set_error(error_out, "word is null or not valid UTF-8");
        return ptr::null_mut();
    };
    result_to_c(handle.transcribe(word), error_out)
}

/// Transcribe one word with an explicit locale tag for this call.
///
/// Same return and error conventions as `fonema_transcribe`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_transcribe_with(
    handle: *const Transcriber,
    word: *const c_char,
    locale: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        set_error(error_out, "handle is null");
        return ptr::null_mut();
    };
    let (Some(word), Some(locale)) = (cstr_to_str(word), cstr_to_str(locale)) else {
        set_error(error_out, "word or locale is null or not valid UTF-8");
        return ptr::null_mut();
    };
    result_to_c(handle.transcribe_with(word, locale), error_out)
}

/// Transcribe running text, copying punctuation and whitespace through.
///
/// Returns a heap-allocated C string. Caller must free with `fonema_free_str`.
/// Returns NULL only when an argument is NULL or not valid UTF-8.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_transcribe_text(
    handle: *const Transcriber,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    str_to_c(&handle.transcribe_text(text))
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by any `fonema_*` function.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn fonema_free_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn result_to_c(result: Result<String, TranscriptionError>, error_out: *mut *mut c_char) -> *mut c_char {
    match result {
        Ok(ipa) => str_to_c(&ipa),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}
