//! deskbook main entrypoint.

use deskbook::{init_tracing, run};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
