use std::process;

use clap::Parser;
use lsgo::FunctionId;
use lsgo::datagen::generate;
use lsgo_env::{data_dir, resolve_base_dir};
use lsgo_harness::{GenerateArgs, HarnessError, init_logging};

fn run(args: GenerateArgs) -> Result<(), HarnessError> {
    let base = resolve_base_dir(args.path.as_deref())?;
    let dir = data_dir(&base);

    let functions = if args.functions.is_empty() {
        FunctionId::ALL.to_vec()
    } else {
        args.functions
    };

    for id in functions {
        generate(id, &dir, args.seed).map_err(|source| HarnessError::Output {
            path: dir.clone(),
            source,
        })?;
        log::info!("{} data written to {}", id, dir.display());
    }
    println!("Data files written to {}", dir.display());
    Ok(())
}

fn main() {
    init_logging();
    let args = GenerateArgs::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
