use ffd::config::FFDConfig;
use ffd::opt::ffd_optimizer::FFDOptimizer;
use sheet_nest::entities::{Instance, Item, Layout};
use sheet_nest::geometry::primitives::{Outline, Point};

pub const N_PARTS: usize = 40;

pub fn create_base_config() -> FFDConfig {
    FFDConfig {
        rotation_step: 15.0,
        translation_step: 10.0,
        ..FFDConfig::default()
    }
}

/// Mix of rectangles and triangles of decreasing size
pub fn create_instance() -> Instance {
    let items = (0..N_PARTS)
        .map(|i| {
            let s = 30.0 + 7.0 * (i % 20) as f64;
            let outline = match i % 2 {
                0 => Outline::closed_polyline(vec![
                    Point(0.0, 0.0),
                    Point(s, 0.0),
                    Point(s, 0.6 * s),
                    Point(0.0, 0.6 * s),
                ]),
                _ => Outline::closed_polyline(vec![Point(0.0, 0.0), Point(s, 0.0), Point(0.5 * s, s)]),
            }
            .expect("valid outline");
            Item::new(i, outline, "0")
        })
        .collect();
    Instance::new(items)
}

/// Fills a layout with all but the smallest items of the instance
pub fn create_dense_layout(instance: &Instance, config: FFDConfig) -> Layout {
    let partial = Instance::new(instance.items()[..N_PARTS - 5].to_vec());
    let solution = FFDOptimizer::new(partial, config)
        .expect("valid config")
        .solve();
    solution.layout
}
