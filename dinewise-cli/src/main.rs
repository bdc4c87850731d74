//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(clippy::print_stderr, reason = "the binary reports fatal errors on stderr")]
fn main() {
    if let Err(err) = dinewise_cli::run() {
        eprintln!("dinewise: {err}");
        std::process::exit(1);
    }
}
