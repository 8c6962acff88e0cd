//! # Barcode Printer CLI
//!
//! Command-line interface for printing Code 128 labels.
//!
//! ## Usage
//!
//! ```bash
//! # List printer devices
//! barcode-printer printers
//!
//! # Show the symbol values and font glyphs for a text
//! barcode-printer encode test1234
//!
//! # Print on a printer (falls back to barcode.png if it is not available)
//! barcode-printer print test1234 --printer /dev/rfcomm0
//!
//! # Save a PNG preview
//! barcode-printer print test1234 --output label.png
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use barcode_printer::{
    BarcodeError,
    code128::{self, font::{self, FontMapping}},
    printer::{self, LabelConfig, PageSetup, PrintRequest, PrintTarget},
};

/// Barcode Printer - Code 128 label utility
#[derive(Parser, Debug)]
#[command(name = "barcode-printer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available printer devices
    Printers,

    /// Show the Code 128 symbol sequence for a text
    Encode {
        /// Text to encode (printable ASCII)
        text: String,

        /// Font glyph layout (standard or contiguous)
        #[arg(long, default_value = "standard", value_parser = FontMapping::parse)]
        font: FontMapping,
    },

    /// Print a barcode label
    Print {
        /// Text to encode (printable ASCII)
        text: String,

        /// Printer device path (omit to write the PNG fallback)
        #[arg(long)]
        printer: Option<String>,

        /// Write a PNG image to this file instead of printing
        #[arg(long, value_name = "FILE", conflicts_with = "printer")]
        output: Option<PathBuf>,

        /// Page size in mm, e.g. 80x40 or 80x40@203
        #[arg(long, value_parser = PageSetup::parse)]
        page: Option<PageSetup>,

        /// JSON label configuration file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BarcodeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Printers => {
            let printers = printer::available_printers();
            if printers.is_empty() {
                println!("No printers found.");
            } else {
                println!("Available printers:");
                for name in printers {
                    println!("  {}", name);
                }
            }
        }

        Commands::Encode {
            text,
            font: mapping,
        } => {
            let symbols = code128::encode(&text)?;
            let values: Vec<String> = symbols.iter().map(|s| s.to_string()).collect();
            let glyphs: Vec<String> = font::to_font_text(&symbols, mapping)
                .chars()
                .map(|c| (c as u32).to_string())
                .collect();
            println!("Symbols: {}", values.join(" "));
            println!("Glyphs:  {}", glyphs.join(" "));
            println!("Check:   {}", symbols[symbols.len() - 2]);
        }

        Commands::Print {
            text,
            printer: device,
            output,
            page,
            config,
        } => {
            let mut label = match config {
                Some(path) => LabelConfig::load(path)?,
                None => LabelConfig::default(),
            };
            if let Some(page) = page {
                label.page = page;
            }

            let target = match output {
                Some(path) => PrintTarget::File(path),
                None => {
                    let available = printer::available_printers();
                    let target = PrintTarget::resolve(device.as_deref(), &available);
                    if target.is_device() {
                        println!("Printer initialized: {}", target.path().display());
                    } else {
                        if let Some(name) = &device {
                            eprintln!("Printer {} is not available.", name);
                        }
                        println!("Printer initialized to generate {}", target.path().display());
                    }
                    target
                }
            };

            println!("Printing \"{}\" ...", text);
            let outcome = PrintRequest::new(text, target, label).execute()?;
            println!("{}", outcome);
            println!("Printing finished");
        }
    }

    Ok(())
}
