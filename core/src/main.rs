use clap::Parser;
use log::{error, info};
use reportcat_core::cli::{Cli, OutputFormat};
use reportcat_core::{ReportExtractor, TextReport};
use std::io::Read;
use std::path::Path;
use std::process;

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let text = match read_narrative(&cli.file) {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read {}: {}", cli.file.display(), e);
            eprintln!("Error: failed to read {}: {}", cli.file.display(), e);
            process::exit(1);
        }
    };

    info!("Read {} bytes from {}", text.len(), cli.file.display());

    let result = match ReportExtractor::extract(&text, Some(cli.document_type.into())) {
        Ok(result) => result,
        Err(e) => {
            error!("Extraction failed: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    match cli.format {
        OutputFormat::Text => {
            println!("{}", TextReport::new(&result));
        }
        #[cfg(feature = "json")]
        OutputFormat::Json => match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("JSON serialization failed: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
    }
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

/// Reads the narrative from a file, or from stdin when the path is "-"
fn read_narrative(path: &Path) -> std::io::Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        std::fs::read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_narrative_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"Findings are negative.").unwrap();

        let text = read_narrative(&file_path).unwrap();
        assert_eq!(text, "Findings are negative.");
    }

    #[test]
    fn test_read_narrative_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does_not_exist.txt");
        assert!(read_narrative(&missing).is_err());
    }

    #[test]
    fn test_end_to_end_file_extraction() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("narrative.txt");

        let mut file = File::create(&file_path).unwrap();
        file.write_all(b"Diagnosis is positive. Confidence is 82%. Severe scarring noted.")
            .unwrap();

        let text = read_narrative(&file_path).unwrap();
        let result = ReportExtractor::extract(&text, None).unwrap();

        assert_eq!(result.probability.as_deref(), Some("82"));
        let output = format!("{}", TextReport::new(&result));
        assert!(output.contains("Probability:    82%"));
    }
}
