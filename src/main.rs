fn main() {
    boxctl::app::cli::run();
}
