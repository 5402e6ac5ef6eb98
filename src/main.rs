fn main() {
    if let Err(err) = pack_quality::cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
