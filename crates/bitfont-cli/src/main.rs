//! bitfontgen - packed bitmap font generator
//!
//! Converts a glyph source (raster glyph sheet + XML descriptor, or a
//! scalable outline font + character list) into C source/header artifacts
//! for the bitfont runtime.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use bitfont_cli::commands;

/// bitfont - packed bitmap font generation
#[derive(Parser)]
#[command(name = "bitfontgen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a font from a glyph sheet image and XML descriptor
    Image {
        /// Path to the glyph sheet image
        #[arg(short, long)]
        image: String,

        /// Path to the XML descriptor file
        #[arg(short = 'x', long)]
        descriptor: String,

        /// Output base path (default: derived from the font's short name)
        #[arg(short, long)]
        output: Option<String>,

        /// Record the font as color-inverted for the renderer
        #[arg(long)]
        invert: bool,
    },

    /// Generate a font by rasterizing a scalable outline font
    Outline {
        /// Path to the outline font file (TTF/OTF)
        font: String,

        /// Pixel size to rasterize at
        size: u32,

        /// Path to a text file listing the characters to include
        chars: String,

        /// Output base path (default: derived from the font's short name)
        #[arg(short, long)]
        output: Option<String>,

        /// Font family name (default: font file stem)
        #[arg(long)]
        family: Option<String>,

        /// Style name recorded in the font table
        #[arg(long, default_value = "Regular")]
        style: String,

        /// Record the font as color-inverted for the renderer
        #[arg(long)]
        invert: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Image {
            image,
            descriptor,
            output,
            invert,
        } => commands::image::run(&image, &descriptor, output.as_deref(), invert),
        Commands::Outline {
            font,
            size,
            chars,
            output,
            family,
            style,
            invert,
        } => commands::outline::run(
            &font,
            size,
            &chars,
            output.as_deref(),
            family.as_deref(),
            &style,
            invert,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(commands::EXIT_OTHER)
        }
    }
}
