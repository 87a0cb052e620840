use clap::Parser;
use hp_ds62_codegen::Error;
use hp_ds62_codegen::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    match commands::run(args) {
        Ok(_summary) => {
            // Success - summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // A missing dataset is not a failure: explain how to get it and stop
            if let Some(Error::MissingInput { path }) = error.downcast_ref::<Error>() {
                commands::print_missing_input_guidance(path);
                process::exit(0);
            }

            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
