use std::env;
use std::process;

use expression_compiler::compile;

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let args: Vec<String> = env::args().collect();
    match args.len() {
        2 => compile_cli(&args[1]),
        _ => {
            usage();
            process::exit(1);
        }
    }
}

fn compile_cli(expression: &str) {
    match compile(expression) {
        Ok(outputs) => {
            print_phase("Tokens", &outputs.tokens);
            print_phase("Syntax tree", &outputs.syntax_tree);
            print_phase("Semantic analysis", &outputs.semantic);
            print_phase("Three-address code", &outputs.intermediate);
            print_phase("Final code", &outputs.final_code);
        }
        Err(error) => {
            eprintln!("{error}");
            process::exit(1);
        }
    }
}

fn print_phase(title: &str, body: &str) {
    println!("=== {title} ===");
    println!("{body}");
    println!();
}

fn usage() {
    println!("Usage:");
    println!("\tcargo run -- \"<expression>\"\n");
    println!("Example:");
    println!("\tcargo run -- \"2 + 3 * x\"");
}
