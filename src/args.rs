use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, OutputFormat};

/// # Errors
///
/// Will return `Err` if the parsed arguments fail validation
pub fn args_checks() -> Result<CleanArgs, String> {
    let args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}
