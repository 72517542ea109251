// fonema-ipa: Transcribe Spanish words into IPA.
//
// Reads words from stdin (one per line) and prints `word<TAB>ipa`. Words
// with no Latin letters print `word<TAB>-`.
//
// Usage:
//   fonema-ipa [-l LOCALE] [OPTIONS] [WORD...]
//
// Options:
//   -l, --locale TAG   es_ES (default) or es_MX; falls back to $FONEMA_LOCALE
//   --fold-stress      Print plain vowels instead of stress placeholders
//   --text             Treat each line (or argument) as running text
//   -h, --help         Print help

use std::io::{self, BufRead, Write};

use fonema_es::{Transcriber, TranscriberOptions};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (locale_flag, args) =
        fonema_cli::parse_locale_flag(&args).unwrap_or_else(|e| fonema_cli::fatal(&e));

    if fonema_cli::wants_help(&args) {
        println!("fonema-ipa: Transcribe Spanish words into IPA.");
        println!();
        println!("Usage: fonema-ipa [-l LOCALE] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, transcribes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -l, --locale TAG   es_ES (default) or es_MX; falls back to $FONEMA_LOCALE");
        println!("  --fold-stress      Print plain vowels instead of stress placeholders");
        println!("  --text             Treat each line (or argument) as running text");
        println!("  -h, --help         Print this help");
        return;
    }

    fonema_cli::init_tracing();

    let options = fonema_cli::parse_ipa_options(&args).unwrap_or_else(|e| fonema_cli::fatal(&e));

    let locale =
        fonema_cli::resolve_locale(locale_flag.as_deref()).unwrap_or_else(|e| fonema_cli::fatal(&e));
    let transcriber = Transcriber::new(TranscriberOptions {
        locale,
        stress_marks: options.stress_marks,
    });

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let emit = |input: &str, out: &mut io::BufWriter<io::StdoutLock<'_>>| -> io::Result<()> {
        writeln!(out, "{}", fonema_cli::format_line(&transcriber, input, options.text_mode))
    };

    let result = if options.inputs.is_empty() {
        let stdin = io::stdin();
        let mut result = Ok(());
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let input = if options.text_mode { line.as_str() } else { line.trim() };
            if input.is_empty() {
                continue;
            }
            result = emit(input, &mut out);
            if result.is_err() {
                break;
            }
        }
        result
    } else {
        options.inputs.iter().try_for_each(|input| emit(input, &mut out))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        fonema_cli::fatal(&format!("failed to write output: {e}"));
    }
}
