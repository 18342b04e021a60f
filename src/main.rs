use env_logger::Env;

const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let output = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_owned());

    let presenter = mandelbrot_explorer::PpmFilePresenter::new();
    let mut controller = mandelbrot_explorer::SnapshotExportController::new(
        presenter,
        mandelbrot_explorer::ExplorerConfig::default(),
        mandelbrot_explorer::SNAPSHOT_WIDTH,
        mandelbrot_explorer::SNAPSHOT_HEIGHT,
    )?;

    controller.generate();
    controller.write(output)?;

    Ok(())
}
