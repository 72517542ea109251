// fonema-cli: shared utilities for the command-line tool.

use std::process;

use fonema_core::Locale;
use fonema_es::{StressMarks, Transcriber};

/// Environment variable consulted when no `--locale` flag is given.
pub const LOCALE_ENV: &str = "FONEMA_LOCALE";

/// Environment variable holding the tracing filter (`trace` feature only).
pub const LOG_ENV: &str = "FONEMA_LOG";

/// Resolve the locale to use.
///
/// Search order:
/// 1. `flag` (the `--locale` argument, if provided)
/// 2. `FONEMA_LOCALE` environment variable
/// 3. `es_ES`
pub fn resolve_locale(flag: Option<&str>) -> Result<Locale, String> {
    let env_value = std::env::var(LOCALE_ENV).ok();
    resolve_locale_from(flag, env_value.as_deref())
}

/// [`resolve_locale`] with the environment value passed in explicitly.
pub fn resolve_locale_from(flag: Option<&str>, env_value: Option<&str>) -> Result<Locale, String> {
    match flag.or(env_value) {
        Some(tag) => Locale::from_tag(tag).map_err(|e| e.to_string()),
        None => Ok(Locale::default()),
    }
}

/// Parse a `--locale=TAG`, `--locale TAG` or `-l TAG` argument from command
/// line args.
///
/// Returns `(locale_tag, remaining_args)`, or an error when the flag has no
/// value.
pub fn parse_locale_flag(args: &[String]) -> Result<(Option<String>, Vec<String>), String> {
    let mut locale = None;
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--locale=") {
            locale = Some(val.to_string());
        } else if arg == "--locale" || arg == "-l" {
            match iter.next() {
                Some(val) => locale = Some(val.clone()),
                None => return Err(format!("{arg} requires a value")),
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((locale, remaining))
}

/// Options for `fonema-ipa` other than the locale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IpaOptions {
    pub stress_marks: StressMarks,
    pub text_mode: bool,
    pub inputs: Vec<String>,
}

/// Parse the arguments left after [`parse_locale_flag`].
///
/// Any other argument starting with `-` is an error.
pub fn parse_ipa_options(args: &[String]) -> Result<IpaOptions, String> {
    let mut options = IpaOptions::default();
    for arg in args {
        match arg.as_str() {
            "--fold-stress" => options.stress_marks = StressMarks::Fold,
            "--text" => options.text_mode = true,
            s if s.starts_with('-') && s.len() > 1 => return Err(format!("unknown option: {s}")),
            _ => options.inputs.push(arg.clone()),
        }
    }
    Ok(options)
}

/// Format one output line (without the newline).
///
/// Word mode prints `word<TAB>ipa`, or `word<TAB>-` when the input has no
/// Latin letters. Text mode prints the transcribed text alone.
pub fn format_line(transcriber: &Transcriber, input: &str, text_mode: bool) -> String {
    if text_mode {
        return transcriber.transcribe_text(input);
    }
    match transcriber.transcribe(input) {
        Ok(ipa) => format!("{input}\t{ipa}"),
        Err(_) => format!("{input}\t-"),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Install a stderr tracing subscriber filtered by `FONEMA_LOG`
/// (default `fonema_es=debug`).
#[cfg(feature = "trace")]
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("fonema_es=debug"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(filter)
        .init();
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing() {}
