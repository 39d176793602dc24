//! Lp surface demo driven by scripted slider drags, drawn to the terminal

use log::info;
use ndarray::Array2;
use normviz::{ContourSpec, SampleGrid, SurfaceDemoConfig, SurfaceNormDemo, SurfacePresenter};

/// Prints a coarse text rendering of the field and its contour levels.
struct ConsolePresenter {
    stride: usize,
}

impl SurfacePresenter for ConsolePresenter {
    fn draw_surface(&mut self, field: &Array2<f64>, extent: [f64; 4]) {
        println!(
            "   surface {}x{} over x [{}, {}], y [{}, {}]",
            field.nrows(),
            field.ncols(),
            extent[0],
            extent[1],
            extent[2],
            extent[3]
        );
        // Highest y first so the picture has its origin at the lower left
        for i in (0..field.nrows()).rev().step_by(self.stride) {
            let line: Vec<String> = field
                .row(i)
                .iter()
                .step_by(self.stride)
                .map(|v| format!("{:6.1}", v))
                .collect();
            println!("   {}", line.join(""));
        }
    }

    fn draw_contours(&mut self, _grid: &SampleGrid, _field: &Array2<f64>, contours: &ContourSpec) {
        println!("   contour levels: {}", contours.labels().join(", "));
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut demo = SurfaceNormDemo::new(SurfaceDemoConfig::default()).unwrap();
    let mut presenter = ConsolePresenter { stride: 4 };

    println!("L^P Norm Demonstration\n");
    println!("p = {}", demo.view_model().p());
    demo.render(&mut presenter);

    for &p in &[0.0, 0.5, 1.0, 3.14, 10.0] {
        let update = demo.drag_p(p).unwrap();
        info!("P slider at {} -> applied p = {:.1}", p, update.p);
        println!("\np = {:.1}", update.p);
        demo.render(&mut presenter);
    }
}
