fn main() {
    if let Err(e) = reviewlens::run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
