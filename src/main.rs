//! resumegen – command-line resume JSON → PDF converter.
//!
//! Usage:
//!   resumegen <resume.json> [output.pdf] [--locale nl]
//!   resumegen --sample [output.pdf]
//!
//! If `output.pdf` is omitted the PDF is written next to the input file with
//! the same stem (e.g. `resume.json` → `resume.pdf`).

use std::{env, fs, path::PathBuf, process};

use resume_forge::locale::Locale;
use resume_forge::model::ResumeData;
use resume_forge::resume::layout_resume;
use resume_forge::samples::sample_resume;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut input_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut locale = Locale::En;
    let mut use_sample = false;
    let mut positional = 0usize;

    let mut iter = args.iter().skip(1).peekable();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--sample" | "-s" => use_sample = true,
            "--locale" | "-l" => match iter.next().and_then(|v| Locale::from_tag(v)) {
                Some(tag) => locale = tag,
                None => {
                    eprintln!("Error: --locale expects 'en' or 'nl'.");
                    process::exit(1);
                }
            },
            "--help" | "-h" => {
                print_usage(&args[0]);
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown flag: {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            path => {
                if positional == 0 {
                    input_path = Some(PathBuf::from(path));
                } else if positional == 1 {
                    output_path = Some(PathBuf::from(path));
                } else {
                    eprintln!("Unexpected argument: {path}");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                positional += 1;
            }
        }
    }

    // With --sample the single positional argument is the output path.
    if use_sample && output_path.is_none() {
        output_path = input_path.take();
    }

    let data: ResumeData = if use_sample {
        sample_resume()
    } else {
        let input = match &input_path {
            Some(p) => p.clone(),
            None => {
                eprintln!("Error: no input file specified.");
                print_usage(&args[0]);
                process::exit(1);
            }
        };
        let json = match fs::read_to_string(&input) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading '{}': {e}", input.display());
                process::exit(1);
            }
        };
        match serde_json::from_str(&json) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Error parsing '{}': {e}", input.display());
                process::exit(1);
            }
        }
    };

    // Default output: same directory + same stem as input, but with .pdf
    let output = output_path.unwrap_or_else(|| match &input_path {
        Some(input) => {
            let mut o = input.clone();
            o.set_extension("pdf");
            o
        }
        None => PathBuf::from("resume.pdf"),
    });

    match layout_resume(&data, locale) {
        Ok(canvas) => {
            let pages = canvas.page_count();
            let bytes = canvas.save();
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() {
                    if let Err(e) = fs::create_dir_all(parent) {
                        eprintln!("Error creating output directory: {e}");
                        process::exit(1);
                    }
                }
            }
            if let Err(e) = fs::write(&output, &bytes) {
                eprintln!("Error writing '{}': {e}", output.display());
                process::exit(1);
            }
            eprintln!(
                "Wrote '{}' ({} bytes, {} page{})",
                output.display(),
                bytes.len(),
                pages,
                if pages == 1 { "" } else { "s" }
            );
        }
        Err(e) => {
            eprintln!("Error generating resume: {e}");
            process::exit(1);
        }
    }
}

fn print_usage(prog: &str) {
    eprintln!("resumegen – resume JSON to PDF converter (resume-forge)");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  {prog} <resume.json> [output.pdf] [--locale nl]");
    eprintln!("  {prog} --sample [output.pdf]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <resume.json>  Resume snapshot (camelCase JSON, as persisted by the editor)");
    eprintln!("  [output.pdf]   Output path  (default: same stem as input with .pdf)");
    eprintln!();
    eprintln!("Flags:");
    eprintln!("  --locale, -l   Output language: en (default) or nl");
    eprintln!("  --sample, -s   Render a built-in sample resume instead of reading a file");
    eprintln!("  --help         Print this message");
}
