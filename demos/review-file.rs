use std::{env, fs, process};

use redline_text::compare;

/// Reviews the changes between two versions of a file from the command line.
/// Verdicts are given as a string of `y` (approve) and `n` (reject)
/// characters, applied to the pending changes in document order; changes
/// without a verdict stay pending and are listed on stderr.
///
/// Run it with:
/// `cargo run --example review-file original.txt modified.txt ynny [output_file.txt]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: review-file <original> <modified> [verdicts] [output]");
        process::exit(1);
    }

    let original_file = &args[1];
    let modified_file = &args[2];
    let verdicts = args.get(3).map_or("", String::as_str);
    let output_file = args.get(4);

    let original = read_or_exit(original_file);
    let modified = read_or_exit(modified_file);

    let mut session = compare(&original, &modified);

    for verdict in verdicts.chars() {
        let applied = match verdict {
            'y' => session.approve_next(),
            'n' => session.reject_next(),
            other => {
                eprintln!("Unknown verdict '{other}', expected 'y' or 'n'");
                process::exit(1);
            }
        };

        if applied.is_none() {
            eprintln!("More verdicts than pending changes");
            process::exit(1);
        }
    }

    for segment in session.pending_changes() {
        eprintln!("Still pending: {:?} ({:?})", segment.text(), segment.kind());
    }

    let merged = session.merged_text();

    if let Some(output_path) = output_file {
        if let Err(error) = fs::write(output_path, merged) {
            eprintln!("Error writing to {output_path}: {error}");
            process::exit(1);
        }
    } else {
        print!("{merged}");
    }
}

fn read_or_exit(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|error| {
        eprintln!("Error reading {path}: {error}");
        process::exit(1);
    })
}
