//! Implementation of the `tonecraft genz` command.

use clap::Args;
use miette::Result;
use tonecraft::genz::to_genz;

/// Arguments for the genz command.
#[derive(Debug, Args)]
pub struct GenzArgs {
    /// Message to convert
    pub text: String,

    /// How far to go, 0-100
    #[arg(short, long, default_value_t = 50, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub intensity: u8,
}

/// Run the genz command.
pub fn run_genz(args: GenzArgs) -> Result<i32> {
    println!("{}", to_genz(&args.text, args.intensity));
    Ok(exitcode::OK)
}
