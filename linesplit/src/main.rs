use clap::{Parser, Subcommand};
use linesplit_core::{split_batch, BatchOptions};
use linesplit_gui::{run_gui, GuiConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linesplit", version, about = "Split text files into equal parts by lines")]
struct Cli {
    /// Disable the GUI (GUI is the default)
    #[arg(long)]
    no_gui: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Split one or more files without opening a window
    Split {
        /// Number of parts per file
        #[arg(long, short, default_value_t = 2)]
        parts: usize,
        /// Directory the parts are written to (defaults to each file's own
        /// directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,
        /// Files to split
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        None => {
            if cli.no_gui {
                eprintln!("Nothing to do without the GUI; try `linesplit split --help`.");
                return Ok(());
            }
            run_gui(GuiConfig::default())?;
        }
        Some(Commands::Split {
            parts,
            output_dir,
            files,
        }) => {
            if parts == 0 {
                eprintln!("--parts must be at least 1");
                std::process::exit(2);
            }
            let options = BatchOptions {
                output_dir,
                num_parts: parts,
            };
            let report = split_batch(&files, &options, |_| {});
            for outcome in &report.outcomes {
                match &outcome.result {
                    Ok(split) => println!(
                        "{}: {} lines into {} parts",
                        outcome.input.display(),
                        split.total_lines,
                        split.parts.len()
                    ),
                    Err(err) => eprintln!("{err}"),
                }
            }
            println!("{}", report.summary());
            if report.succeeded() == 0 {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
