use std::io::BufRead;
use std::path::Path;

use log::{error, info};
use pwgen_lib::charset::{CharacterPool, CharsetSelection};
use pwgen_lib::generator::PasswordGenerator;
use pwgen_lib::report::Report;
use pwgen_lib::timer;

use crate::prompt::{confirm, PromptError};

pub const OUTPUT_FILE: &str = "generated_passwords.txt";

pub const LENGTHS: [usize; 20] = [
    10_000, 20_000, 30_000, 40_000, 50_000, 60_000, 70_000, 80_000, 90_000, 100_000, 150_000,
    200_000, 300_000, 400_000, 500_000, 600_000, 700_000, 800_000, 900_000, 1_000_000,
];

/// Issues the six prompts in pool order.
pub fn collect_selection(input: &mut impl BufRead) -> Result<CharsetSelection, PromptError> {
    Ok(CharsetSelection {
        latin_lower: confirm("Use lowercase Latin letters?", input)?,
        latin_upper: confirm("Use uppercase Latin letters?", input)?,
        digits: confirm("Use digits?", input)?,
        symbols: confirm("Use symbols?", input)?,
        cyrillic_lower: confirm("Use lowercase Cyrillic letters?", input)?,
        cyrillic_upper: confirm("Use uppercase Cyrillic letters?", input)?,
    })
}

/// One full run: prompts, pool assembly, the generate/time loop over
/// every preset length, then a single file write. All anticipated
/// failures are reported here; the caller always exits normally.
pub fn run(input: &mut impl BufRead, generator: &mut PasswordGenerator, output: impl AsRef<Path>) {
    let selection = match collect_selection(input) {
        Ok(selection) => selection,
        Err(error) => {
            eprintln!("Error: {}", error);
            return;
        }
    };

    let pool = match CharacterPool::build(&selection) {
        Ok(pool) => pool,
        Err(error) => {
            eprintln!("Error: {}", error);
            return;
        }
    };

    info!("character pool built with {} characters", pool.len());

    let report = generate_report(generator, &pool);

    let output = output.as_ref();
    match report.write_to_file(output) {
        Ok(()) => {
            info!(
                "report with {} blocks written to \"{}\"",
                report.block_count(),
                output.display()
            );
        }
        Err(error) => {
            // Deliberately lossy: the in-memory report is dropped and
            // the process still exits normally.
            error!("failed to write \"{}\": {}", output.display(), error);
            eprintln!("Error writing to file: {}", error);
        }
    }
}

fn generate_report(generator: &mut PasswordGenerator, pool: &CharacterPool) -> Report {
    let mut report = Report::new();

    for &length in LENGTHS.iter() {
        let (password, elapsed) = timer::measure(|| generator.generate(pool, length));
        report.append(length, &password);
        println!(
            "Generated password of length {} in {} ms",
            length,
            elapsed.as_millis()
        );
    }

    report
}

#[cfg(test)]
mod test {
    use super::{collect_selection, run, LENGTHS};
    use crate::prompt::PromptError;
    use pwgen_lib::charset::CharsetSelection;
    use pwgen_lib::generator::PasswordGenerator;
    use std::io::Cursor;

    #[test]
    fn collect_selection_in_prompt_order() {
        let mut input = Cursor::new("y\nn\ny\nn\nn\nyes\n");
        let selection = collect_selection(&mut input).unwrap();

        assert_eq!(
            selection,
            CharsetSelection {
                latin_lower: true,
                latin_upper: false,
                digits: true,
                symbols: false,
                cyrillic_lower: false,
                cyrillic_upper: true,
            }
        );
    }

    #[test]
    fn collect_selection_propagates_closed_input() {
        let mut input = Cursor::new("y\ny\n");
        let result = collect_selection(&mut input);
        assert!(result.unwrap_err() == PromptError::Closed);
    }

    #[test]
    fn run_with_nothing_selected_leaves_file_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("generated_passwords.txt");
        std::fs::write(&path, "previous run").unwrap();

        let mut input = Cursor::new("n\nn\nn\nn\nn\nn\n");
        let mut generator = PasswordGenerator::with_seed(1);
        run(&mut input, &mut generator, &path);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "previous run");
    }

    #[test]
    fn run_with_closed_input_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("generated_passwords.txt");

        let mut input = Cursor::new("y\n");
        let mut generator = PasswordGenerator::with_seed(1);
        run(&mut input, &mut generator, &path);

        assert!(!path.exists());
    }

    #[test]
    fn run_writes_all_blocks_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("generated_passwords.txt");

        let mut input = Cursor::new("y\nn\nn\nn\nn\nn\n");
        let mut generator = PasswordGenerator::with_seed(1);
        run(&mut input, &mut generator, &path);

        let contents = std::fs::read_to_string(&path).unwrap();

        let headers: Vec<&str> = contents
            .lines()
            .filter(|line| line.starts_with("Password of length "))
            .collect();
        let expected: Vec<String> = LENGTHS
            .iter()
            .map(|length| format!("Password of length {}:", length))
            .collect();
        assert_eq!(headers, expected);

        let delimiters = contents
            .lines()
            .filter(|line| *line == "--------------------------------------------------")
            .count();
        assert_eq!(delimiters, 2 * LENGTHS.len());

        // Latin-lower only pool, so every password line is lowercase ascii.
        let total_password_chars: usize = contents
            .lines()
            .filter(|line| line.chars().all(|c| c.is_ascii_lowercase()) && !line.is_empty())
            .map(|line| line.len())
            .sum();
        assert_eq!(total_password_chars, LENGTHS.iter().sum::<usize>());
    }

    #[test]
    fn run_reports_write_failure_without_panicking() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("generated_passwords.txt");

        let mut input = Cursor::new("y\nn\nn\nn\nn\nn\n");
        let mut generator = PasswordGenerator::with_seed(1);
        run(&mut input, &mut generator, &path);

        assert!(!path.exists());
    }
}
