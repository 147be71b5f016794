use box_swap::DemoConfig;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity
    env_logger::init();

    box_swap::run_app(DemoConfig::default())
}
