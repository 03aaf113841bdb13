//! plane2d demo binary
//!
//! Loads a scene of shapes, indexes their centers in a spatial hash, and
//! runs a proximity pass over every shape: broad-phase grid query, then an
//! exact distance filter on the candidates. Query buffers come from a pool
//! so the pass allocates nothing after warmup.

use std::collections::HashSet;

use slotmap::{SecondaryMap, SlotMap};

use plane2d::config::SpatialConfig;
use plane2d::{AppConfig, Point2, Pool, Scene, Shape, SpatialHash};

slotmap::new_key_type! {
    /// Generational key for a shape stored in the demo world
    struct ShapeKey;
}

fn main() {
    // Load configuration before the logger so the configured level applies
    let config_result = AppConfig::load();
    let config = match &config_result {
        Ok(config) => config.clone(),
        Err(_) => AppConfig::default(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(&config.debug.log_level),
    )
    .init();

    if let Err(e) = &config_result {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting plane2d");

    // Load scene from configured path, falling back to a built-in scene
    let scene = Scene::load(&config.scene.path).unwrap_or_else(|e| {
        log::warn!(
            "Failed to load scene '{}': {}. Using built-in scene.",
            config.scene.path,
            e
        );
        built_in_scene()
    });

    // Shapes that fail validation are dropped before anything reads them;
    // deserialized values can violate the constructor invariants
    let errors = scene.validate();
    let mut rejected: HashSet<usize> = HashSet::new();
    for error in &errors {
        log::warn!("Scene '{}' validation: {}", scene.name, error);
        if let Some(index) = error.shape_index() {
            rejected.insert(index);
        }
    }

    // Populate the world and index shape centers
    let mut world: SlotMap<ShapeKey, Shape> = SlotMap::with_key();
    for (index, shape) in scene.shapes.into_iter().enumerate() {
        if rejected.contains(&index) {
            log::warn!("Dropping invalid shape {}", index);
            continue;
        }
        world.insert(shape);
    }

    let mut grid: SpatialHash<ShapeKey> = match SpatialHash::new(config.spatial.cell_size) {
        Ok(grid) => grid,
        Err(e) => {
            let fallback = SpatialConfig::default().cell_size;
            log::warn!("{}. Using default cell size {}.", e, fallback);
            SpatialHash::new(fallback)
                .unwrap_or_else(|e| panic!("Invalid default cell size: {}", e))
        }
    };

    let mut centers: SecondaryMap<ShapeKey, Point2> = SecondaryMap::new();
    for (key, shape) in world.iter_mut() {
        let center = shape.center();
        centers.insert(key, center);
        grid.insert(key, center.x, center.y);
    }

    log::info!(
        "Loaded scene '{}': {} shapes across {} grid cells (cell size {})",
        scene.name,
        grid.len(),
        grid.cell_count(),
        grid.cell_size()
    );

    if config.debug.dump_shapes {
        for (key, shape) in world.iter_mut() {
            log::debug!("{:?}: {}", key, shape);
        }
    }

    // Proximity pass: broad phase per shape, then exact center distance
    let mut buffers: Pool<Vec<ShapeKey>> = Pool::with_reset(Vec::new, |buffer| buffer.clear());
    buffers.preallocate(config.spatial.pool_prealloc);

    let radius = config.spatial.query_radius;
    let mut total_candidates = 0usize;
    let mut total_links = 0usize;

    let keys: Vec<ShapeKey> = world.keys().collect();
    for key in keys {
        let Some(center) = centers.get(key).copied() else {
            continue;
        };
        let mut candidates = buffers.acquire();
        grid.query_into(center.x, center.y, radius, &mut candidates);
        total_candidates += candidates.len().saturating_sub(1);

        let neighbors = candidates
            .iter()
            .filter(|other| {
                **other != key
                    && centers
                        .get(**other)
                        .map(|c| center.distance(*c) <= radius)
                        .unwrap_or(false)
            })
            .count();
        total_links += neighbors;

        log::debug!(
            "{:?} at {}: {} broad-phase candidates, {} within {}",
            key,
            center,
            candidates.len().saturating_sub(1),
            neighbors,
            radius
        );
        buffers.release(candidates);
    }

    log::info!(
        "Proximity pass: {} broad-phase candidates, {} neighbor pairs within {} (buffers pooled: {})",
        total_candidates,
        total_links / 2,
        radius,
        buffers.len()
    );
}

/// Fallback scene used when the configured file is missing or malformed
fn built_in_scene() -> Scene {
    use plane2d::{Circle, Polygon, Rect, Vec2};

    let mut scene = Scene::new("built-in");
    scene.add_shape(Rect::new(Point2::new(0.0, 0.0), Vec2::new(100.0, 100.0)));
    scene.add_shape(Rect::new(Point2::new(150.0, 40.0), Vec2::new(60.0, 60.0)));
    if let Ok(circle) = Circle::new(Point2::new(20.0, 30.0), 15.0) {
        scene.add_shape(circle);
    }
    if let Ok(circle) = Circle::new(Point2::new(500.0, 500.0), 15.0) {
        scene.add_shape(circle);
    }
    if let Ok(polygon) = Polygon::new(vec![
        Point2::new(0.0, 0.0),
        Point2::new(40.0, 0.0),
        Point2::new(20.0, 10.0),
        Point2::new(40.0, 40.0),
        Point2::new(0.0, 40.0),
    ]) {
        scene.add_shape(polygon);
    }
    scene
}
