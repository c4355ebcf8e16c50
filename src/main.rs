fn main() -> Result<(), eframe::Error> {
    // Set up logging; verbosity comes from RUST_LOG
    env_logger::init();

    // Run the editor application
    circuit_sketch::run_app()
}
