fn main() {
    appboot::app::cli::run();
}
