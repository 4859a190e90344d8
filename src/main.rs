use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use pdf2txt::{run, Backend, Config, Outcome, OutputFormat};

#[derive(Parser)]
#[command(version, about = "Extract the plain text of a PDF into a file")]
struct Args {
    /// PDF document to read
    #[arg(short, long, default_value = "Technical Design for Blog .pdf")]
    input: PathBuf,
    /// File to create or overwrite with the extracted text
    #[arg(short, long, default_value = "blog_design_extracted.txt")]
    output: PathBuf,
    #[arg(short, long, value_enum, default_value_t = Backend::Lopdf)]
    backend: Backend,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input_path: args.input,
            output_path: args.output,
            backend: args.backend,
            format: args.format,
        }
    }
}

/// Console lines for an outcome, and whether the run succeeded.
fn summarize(outcome: &Outcome) -> (Vec<String>, bool) {
    match outcome {
        Outcome::Written(report) => (
            vec![format!(
                "Text extracted successfully to {}",
                report.output_path.display()
            )],
            true,
        ),
        Outcome::Failed(e) => (
            vec![
                format!("Error extracting text: {}", e),
                "Failed to extract text".to_string(),
            ],
            false,
        ),
    }
}

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from(Args::parse());
    let outcome = run(&config)?;
    let (lines, success) = summarize(&outcome);
    for line in lines {
        println!("{}", line);
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
