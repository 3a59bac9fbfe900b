fn main() {
    create_chronicals_app::app::cli::run();
}
