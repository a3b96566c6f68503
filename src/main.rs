fn main() {
    env_logger::init();
    holmes::app::cli::run();
}
