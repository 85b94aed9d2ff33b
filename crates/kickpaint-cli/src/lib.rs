//! kickpaint command-line interface.
//!
//! ```text
//! kickpaint render --output floppy.ppm          # render the built-in drawing
//! kickpaint render -i prog.hex --hex -o out.ppm  # render a hex program
//! kickpaint dump -i prog.bin                     # list decoded commands
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use kickpaint::{
    decode_hex, decode_with, kickstart_bytes, render_image, write_ppm, Config, Instruction,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render a program to a binary PPM image
    Render {
        #[command(flatten)]
        source: SourceArgs,
        /// Output image path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print the decoded stroke instructions and fill requests
    Dump {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Program file; the built-in floppy drawing is used when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,
    /// Treat the input file as hex text instead of raw bytes
    #[arg(long, requires = "input")]
    pub hex: bool,
    /// Render configuration (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    fn load_program(&self) -> Result<Vec<u8>> {
        let Some(path) = &self.input else {
            info!("using built-in floppy drawing");
            return Ok(kickstart_bytes());
        };

        if self.hex {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            decode_hex(&text).with_context(|| format!("invalid hex in {}", path.display()))
        } else {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
    }

    fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Ok(Config::from_file(path)?),
            None => Ok(Config::default()),
        }
    }
}

/// Parse arguments from the process and run.
pub fn run() -> Result<()> {
    run_with(Cli::parse(), &mut io::stdout().lock())
}

/// Run a parsed command line, writing listings to `out`.
pub fn run_with(cli: Cli, out: &mut dyn Write) -> Result<()> {
    match cli.command {
        Command::Render { source, output } => {
            let bytes = source.load_program()?;
            let config = source.load_config()?;
            let palette = config.palette()?;
            let image = render_image(&bytes, &palette, &config.render_options())?;
            write_image(&image, &output)?;
            info!("wrote {}", output.display());
        }
        Command::Dump { source } => {
            let bytes = source.load_program()?;
            let config = source.load_config()?;
            let palette = config.palette()?;
            let program = decode_with(&bytes, &palette, &config.render_options().decode)?;

            for instruction in &program.instructions {
                match instruction {
                    Instruction::SetStrokeColor { color, pen } => {
                        writeln!(out, "polyline color={color} start={pen}")?
                    }
                    Instruction::DrawSegment { from, to } => {
                        writeln!(out, "  line {from} -> {to}")?
                    }
                }
            }
            for fill in &program.fills {
                let seed = fill.seed();
                writeln!(out, "fill color={} seed=({}, {})", fill.color, seed.x, seed.y)?;
            }
        }
    }
    Ok(())
}

fn write_image(image: &kickpaint::PixelBuffer, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_ppm(image, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", path.display()))
}
