use mandelbrot_viewer::{FrameController, ScriptedNavigation, SummaryPresenter, ViewerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = ViewerConfig::default();
    let mut presenter = SummaryPresenter::new(config.size());
    let mut controller = FrameController::for_presenter(config, &presenter)?;
    let mut navigation = ScriptedNavigation::tour(controller.scroll_sender());

    println!("Rendering Mandelbrot tour...");
    println!("Image size: {}x{}", config.size().width(), config.size().height());
    println!("Max iterations: {}", config.max_iterations());
    println!("Workers: {}", config.worker_count());

    while !navigation.is_finished() {
        let stats = controller.present_next(&mut navigation, &mut presenter)?;
        println!(
            "Frame {:>3}: {:.2?}  {}",
            stats.frame_index, stats.render_duration, stats.viewport
        );
    }

    if let Some(last) = presenter.summaries().last() {
        println!("Final checksum: {:016x}", last.checksum);
        println!("Mean intensity: {:.2}", last.mean_intensity);
    }

    Ok(())
}
