//! Arith CLI
//!
//! Builds the sample trees by hand and prints what each crate makes of them.

mod logging;
mod samples;

use arith_bytecode::{compile, disassemble, BytecodeError, Vm};

fn main() {
    logging::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map_or("demo", String::as_str);

    match command {
        "demo" => run_demo(),
        "bytecode" => {
            if let Err(err) = run_bytecode() {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            eprintln!("{}", usage());
            std::process::exit(1);
        }
    }
}

fn run_demo() {
    for expr in samples::all() {
        println!("{}", samples::summary(&expr));
    }
}

fn run_bytecode() -> Result<(), BytecodeError> {
    let mut vm = Vm::new();
    for expr in samples::all() {
        println!("{}", arith_fmt::format(&expr));
        let program = compile(&expr)?;
        print!("{}", disassemble(&program));
        println!("result: {}", vm.run(&program)?);
        println!();
    }
    Ok(())
}

fn usage() -> &'static str {
    "Usage: arith [command]\n\
     \n\
     Commands:\n\
     \x20 demo       Print each sample expression with its value (default)\n\
     \x20 bytecode   Print each sample's bytecode listing and VM result\n\
     \x20 help       Show this message"
}

fn print_usage() {
    println!("{}", usage());
}
