fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let command = mandelbrot_viewer::RunGuiCommand::new(mandelbrot_viewer::ViewerConfig::default());

    command.execute()
}
