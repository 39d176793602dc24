//! L2 vector demo driven by scripted slider drags, drawn to the terminal

use log::info;
use normviz::{VectorDemoConfig, VectorNormDemo, VectorPresenter};

/// Prints each draw call instead of rendering a window.
struct ConsolePresenter;

impl VectorPresenter for ConsolePresenter {
    fn set_axes(&mut self, min: f64, max: f64) {
        println!("   axes: [{:.1}, {:.1}] x [{:.1}, {:.1}]", min, max, min, max);
    }

    fn draw_vector(&mut self, tip: (f64, f64)) {
        println!("   arrow: (0, 0) -> ({:.2}, {:.2})", tip.0, tip.1);
    }

    fn show_label(&mut self, text: &str) {
        println!("   label: {}", text);
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut demo = VectorNormDemo::new(VectorDemoConfig::default()).unwrap();
    let mut presenter = ConsolePresenter;

    println!("L2 Norm Demonstration\n");
    demo.render(&mut presenter);

    // Drag x_1 across its range, then x_2
    for &x in &[-10.0, -2.5, 0.0, 6.0, 10.0] {
        let update = demo.drag_x(x);
        info!("x_1 = {:.2} -> norm {:.4}", x, update.norm);
        demo.render(&mut presenter);
    }
    for &y in &[-4.0, 0.0, 12.0] {
        demo.drag_y(y);
        demo.render(&mut presenter);
    }

    println!("\nSliders clamp to [-10, 10]; the norm follows sqrt(x_1^2 + x_2^2).");
}
