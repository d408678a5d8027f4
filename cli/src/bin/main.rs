//! Chainconf CLI binary entry point.

fn main() {
    if let Err(e) = chainconf::run() {
        chainconf::output::error(&e.to_string());
        std::process::exit(1);
    }
}
