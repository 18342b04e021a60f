use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_explorer::{ExplorerConfig, Point, RenderMode, ViewportController};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn bench_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");

    for mode in [RenderMode::Serial, RenderMode::Parallel] {
        let mut controller = ViewportController::new(ExplorerConfig::default(), WIDTH, HEIGHT)
            .expect("default config is valid")
            .with_render_mode(mode);
        controller.zoom_in();
        controller.recenter(Point {
            x: WIDTH as i32 / 3,
            y: HEIGHT as i32 / 2,
        });

        group.bench_function(BenchmarkId::new("full_frame", mode), |b| {
            b.iter(|| {
                // toggling the zoom keeps the view fixed while forcing a recompute
                controller.zoom_in();
                controller.zoom_out();
                controller.refresh()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_refresh);
criterion_main!(benches);
