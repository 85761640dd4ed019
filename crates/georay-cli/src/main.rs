//! georay CLI - ray / Earth-ellipsoid intersection
//!
//! Takes a ray direction and origin offset (km) as six positional numbers
//! and prints the selected intersection with the reference ellipsoid.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, Parser, ValueEnum};
use georay_intersect::{intersect_ellipsoid, Ellipsoid, IntersectError, Normalization};

mod input;
mod render;

use input::InputError;

const USAGE: &str = "Usage: georay d_l_x d_l_y d_l_z c_l_x c_l_y c_l_z";

const EXIT_USAGE: u8 = 1;
const EXIT_PARSE: u8 = 2;
const EXIT_DEGENERATE: u8 = 3;
const EXIT_IO: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "georay", version)]
#[command(about = "Intersect a ray with the Earth reference ellipsoid", long_about = None)]
#[command(override_usage = "georay [OPTIONS] d_l_x d_l_y d_l_z c_l_x c_l_y c_l_z")]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Ray direction (d_l_x d_l_y d_l_z) then origin offset (c_l_x c_l_y c_l_z), in km
    ///
    /// Options go before the components; any text starting with `-` that is
    /// not `-v`, `-h` or `-V` is taken as a component (`-.5`, `-1e+5`, `-inf`).
    #[arg(value_name = "COMPONENT", allow_hyphen_values = true)]
    components: Vec<String>,

    /// How ray vectors are scaled before solving
    #[arg(long, value_enum, default_value_t = NormalizationArg::Literal)]
    normalization: NormalizationArg,

    /// Print the scaled vectors, quadratic and roots to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NormalizationArg {
    /// Divide by the squared radii (matches the established tool)
    Literal,
    /// Divide by the radii (textbook ellipsoid quadratic)
    Standard,
}

impl From<NormalizationArg> for Normalization {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::Literal => Normalization::Literal,
            NormalizationArg::Standard => Normalization::Standard,
        }
    }
}

fn main() -> ExitCode {
    let code = match Cli::try_parse() {
        Ok(cli) => {
            let result = run(&cli, &mut io::stdout().lock(), &mut io::stderr().lock());
            match result {
                Ok(()) => 0,
                Err(err) => report_failure(&err, &mut io::stdout(), &mut io::stderr()),
            }
        }
        Err(err) => report_clap_error(&err, &mut io::stdout(), &mut io::stderr()),
    };
    ExitCode::from(code)
}

fn run<O: Write, E: Write>(cli: &Cli, out: &mut O, diag: &mut E) -> Result<()> {
    let ray = input::parse_ray(&cli.components)?;
    let ellipsoid = Ellipsoid::EARTH;
    let normalization = Normalization::from(cli.normalization);

    if cli.verbose {
        render::write_diagnostics(diag, &ray, &ellipsoid, normalization)
            .context("writing diagnostics")?;
    }

    let intersection = intersect_ellipsoid(&ray, &ellipsoid, normalization)
        .context("intersecting ray with ellipsoid")?;
    render::write_intersection(out, &intersection).context("writing result")?;
    Ok(())
}

/// Help and version exit cleanly; a bad option is treated like a bad count.
///
/// Write failures are ignored: the exit code still reports the outcome.
fn report_clap_error<O: Write, E: Write>(err: &clap::Error, out: &mut O, diag: &mut E) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", err.render());
            0
        }
        ErrorKind::InvalidValue | ErrorKind::ValueValidation => {
            let _ = write!(diag, "{}", err.render());
            EXIT_PARSE
        }
        _ => {
            let _ = writeln!(out, "{USAGE}");
            EXIT_USAGE
        }
    }
}

/// Print the usage line or the error chain and return the exit code.
///
/// Write failures are ignored: the exit code still reports the outcome.
fn report_failure<O: Write, E: Write>(err: &anyhow::Error, out: &mut O, diag: &mut E) -> u8 {
    let code = exit_code(err);
    if code == EXIT_USAGE {
        let _ = writeln!(out, "{USAGE}");
    } else {
        let _ = writeln!(diag, "error: {err:#}");
    }
    code
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(input) = err.downcast_ref::<InputError>() {
        return match input {
            InputError::WrongCount(_) => EXIT_USAGE,
            InputError::InvalidNumber { .. } => EXIT_PARSE,
        };
    }
    if err.downcast_ref::<IntersectError>().is_some() {
        return EXIT_DEGENERATE;
    }
    EXIT_IO
}
