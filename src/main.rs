use colored::Colorize;
use std::error::Error;
use subnet_calc::calc_subnet;
use subnet_calc::output::{print_json, print_result};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).ok();
    log::info!("#Start main()");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let inputs: Vec<&String> = args.iter().filter(|a| *a != "--json").collect();

    if inputs.len() != 2 {
        eprintln!("usage: subnet-calc <address> <prefix> [--json]");
        std::process::exit(2);
    }

    match calc_subnet(inputs[0], inputs[1]) {
        Ok(result) => {
            if json {
                print_json(&result)?;
            } else {
                print_result(&result);
            }
        }
        Err(e) => {
            log::warn!("rejected input: {e}");
            eprintln!("{} {e}", "error:".red());
            std::process::exit(1);
        }
    }

    Ok(())
}
