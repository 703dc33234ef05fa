use clap::{Parser, Subcommand};
use cplx::{read_matrix, ComplexMatrix, ComplexNumber, TextFormat};
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "CPLX CLI - Complex number and matrix arithmetic on the command line")]
struct Cli {
    /// Log accepted rows and matrix shapes
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Render rows between '|' instead of '[' and ']'
    #[arg(long, global = true)]
    pipes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a complex number and show its canonical form
    Parse {
        /// Complex number such as 3-2i, -i or 7
        token: String,
    },
    /// Read two matrices from stdin and print their product
    Multiply,
    /// Read two matrices from stdin and print their sum
    Add,
    /// Read two matrices from stdin and print their difference
    Subtract,
    /// Print the identity matrix of the given size
    Identity {
        size: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    let format = if cli.pipes {
        TextFormat::default().with_delimiters('|', '|')
    } else {
        TextFormat::default()
    };

    if let Err(err) = run(&cli.command, &format) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: &Commands, format: &TextFormat) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Parse { token } => {
            let value: ComplexNumber = token.parse()?;
            println!("value:     {value}");
            println!("magnitude: {}", value.abs());
            println!("conjugate: {}", value.conjugate());
        }
        Commands::Identity { size } => {
            print!("{}", cplx::render_matrix(&ComplexMatrix::identity(*size)?, format));
        }
        Commands::Multiply | Commands::Add | Commands::Subtract => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let left = read_prompted("first", &mut input, format)?;
            let right = read_prompted("second", &mut input, format)?;
            let result = match command {
                Commands::Multiply => left.multiply(&right)?,
                Commands::Add => left.add(&right)?,
                _ => left.subtract(&right)?,
            };
            print!("{}", cplx::render_matrix(&result, format));
        }
    }
    Ok(())
}

fn read_prompted<R: BufRead>(
    which: &str,
    input: &mut R,
    format: &TextFormat,
) -> Result<ComplexMatrix, cplx::ReadError> {
    eprintln!("Enter the {which} matrix, followed by a blank line:");
    read_matrix(input, format)
}
