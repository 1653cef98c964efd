fn main() {
    templater::app::cli::run();
}
