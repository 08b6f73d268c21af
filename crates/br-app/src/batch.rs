use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use br_codec::translator::Translator;

use crate::cli::Direction;
use crate::output::Printer;

/// Point d'entrée pour la traduction par lots.
///
/// Lines are translated in parallel and written back in input order. A blank
/// input line gives a blank output line. A line that fails is logged,
/// written as a blank line, and counted.
///
/// # Errors
/// If the file cannot be read, on I/O failure, or if any line failed.
pub fn run_batch(
    file: &Path,
    direction: Direction,
    translator: &Translator<'_>,
    printer: &Printer,
    out: &mut dyn Write,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("cannot read batch input {}", file.display()))?;
    let lines: Vec<&str> = content.lines().collect();
    log::info!("batch {direction:?}: {} line(s) from {}", lines.len(), file.display());

    let failed = match direction {
        Direction::Encode => {
            let results = translator.encode_batch(&lines);
            write_results(&lines, results, out, |out, t| printer.encoded(out, t))?
        }
        Direction::Decode => {
            let results = translator.decode_batch(&lines);
            write_results(&lines, results, out, |out, t| printer.decoded(out, t))?
        }
    };

    if failed > 0 {
        anyhow::bail!("{failed} of {} line(s) failed", lines.len());
    }
    Ok(())
}

fn write_results<T, E, F>(
    lines: &[&str],
    results: Vec<Result<T, E>>,
    out: &mut dyn Write,
    mut print: F,
) -> Result<usize>
where
    E: std::fmt::Display,
    F: FnMut(&mut dyn Write, &T) -> Result<()>,
{
    let mut failed = 0;
    for (number, (line, result)) in lines.iter().zip(results).enumerate() {
        match result {
            Ok(t) => print(&mut *out, &t)?,
            Err(_) if line.trim().is_empty() => writeln!(out)?,
            Err(e) => {
                log::warn!("line {}: {e}", number + 1);
                failed += 1;
                writeln!(out)?;
            }
        }
    }
    Ok(failed)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;
    use br_core::config::CodecConfig;

    fn input(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    fn printer() -> Printer {
        Printer {
            json: false,
            blank: '_',
        }
    }

    #[test]
    fn decode_lines_in_order() {
        let file = input("125 135 123 1\n\n46 1\n");
        let translator = Translator::from_config(&CodecConfig::default()).unwrap();
        let mut out = Vec::new();
        run_batch(file.path(), Direction::Decode, &translator, &printer(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hola\n\nA\n");
    }

    #[test]
    fn encode_lines_as_json() {
        let file = input("a\nb\n");
        let translator = Translator::from_config(&CodecConfig::default()).unwrap();
        let printer = Printer {
            json: true,
            blank: '_',
        };
        let mut out = Vec::new();
        run_batch(file.path(), Direction::Encode, &translator, &printer, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let docs: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[1]["original_text"], "b");
    }

    #[test]
    fn failing_line_is_counted() {
        let file = input("1\n17\n12\n");
        let translator = Translator::from_config(&CodecConfig::default()).unwrap();
        let mut out = Vec::new();
        let err = run_batch(file.path(), Direction::Decode, &translator, &printer(), &mut out)
            .unwrap_err();
        assert_eq!(err.to_string(), "1 of 3 line(s) failed");
        assert_eq!(String::from_utf8(out).unwrap(), "a\n\nb\n");
    }

    #[test]
    fn missing_file() {
        let translator = Translator::from_config(&CodecConfig::default()).unwrap();
        let mut out = Vec::new();
        let err = run_batch(
            Path::new("/nonexistent/lines.txt"),
            Direction::Encode,
            &translator,
            &printer(),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lines.txt"));
    }
}
