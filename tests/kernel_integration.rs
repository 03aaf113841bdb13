//! Integration tests for the full kernel pipeline
//!
//! Scene persistence round trip, validation, and broad-phase plus exact
//! proximity filtering over a loaded scene.

use slotmap::{SecondaryMap, SlotMap};

use plane2d::{Circle, Point2, Polygon, Pool, Rect, Scene, Shape, SpatialHash, Vec2};

slotmap::new_key_type! {
    struct ShapeKey;
}

fn demo_scene() -> Scene {
    let mut scene = Scene::new("integration");
    scene.add_shape(Rect::new(Point2::new(0.0, 0.0), Vec2::new(100.0, 100.0)));
    scene.add_shape(Circle::new(Point2::new(20.0, 30.0), 15.0).unwrap());
    scene.add_shape(Circle::new(Point2::new(500.0, 500.0), 15.0).unwrap());
    scene.add_shape(
        Polygon::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(40.0, 0.0),
            Point2::new(20.0, 10.0),
            Point2::new(40.0, 40.0),
            Point2::new(0.0, 40.0),
        ])
        .unwrap(),
    );
    scene
}

#[test]
fn test_scene_file_round_trip() {
    let path = std::env::temp_dir().join("plane2d_kernel_round_trip.ron");
    let scene = demo_scene();
    scene.save(&path).unwrap();

    let loaded = Scene::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded.name, "integration");
    assert_eq!(loaded.shapes, scene.shapes);
    assert!(loaded.validate().is_empty());
}

#[test]
fn test_shipped_demo_scene_parses_and_validates() {
    let scene = Scene::load("scenes/demo.ron").unwrap();
    assert_eq!(scene.name, "demo");
    assert!(!scene.shapes.is_empty());
    assert!(scene.validate().is_empty(), "errors: {:?}", scene.validate());
}

#[test]
fn test_broad_phase_then_exact_filter() {
    let mut world: SlotMap<ShapeKey, Shape> = SlotMap::with_key();
    for shape in demo_scene().shapes {
        world.insert(shape);
    }

    let mut grid: SpatialHash<ShapeKey> = SpatialHash::new(64.0).unwrap();
    let mut centers: SecondaryMap<ShapeKey, Point2> = SecondaryMap::new();
    for (key, shape) in world.iter_mut() {
        let center = shape.center();
        centers.insert(key, center);
        grid.insert(key, center.x, center.y);
    }

    // The far circle at (500, 500) must never appear near the cluster
    let far_key = world
        .iter()
        .find_map(|(key, shape)| match shape {
            Shape::Circle(circle) if circle.center().x > 400.0 => Some(key),
            _ => None,
        })
        .unwrap();

    let mut buffers: Pool<Vec<ShapeKey>> = Pool::with_reset(Vec::new, |buffer| buffer.clear());
    buffers.preallocate(1);

    let radius = 96.0;
    let mut candidates = buffers.acquire();
    grid.query_into(25.0, 25.0, radius, &mut candidates);
    assert!(!candidates.contains(&far_key));

    // Exact filter keeps only true neighbors of the query point
    let query = Point2::new(25.0, 25.0);
    let exact: Vec<ShapeKey> = candidates
        .iter()
        .copied()
        .filter(|key| centers[*key].distance(query) <= radius)
        .collect();
    assert_eq!(exact.len(), 3); // rect, near circle, polygon

    buffers.release(candidates);
    assert_eq!(buffers.len(), 1);
}

#[test]
fn test_moving_a_shape_updates_queries() {
    let mut world: SlotMap<ShapeKey, Shape> = SlotMap::with_key();
    let key = world.insert(Circle::new(Point2::new(10.0, 10.0), 5.0).unwrap().into());

    let mut grid: SpatialHash<ShapeKey> = SpatialHash::new(32.0).unwrap();
    grid.insert(key, 10.0, 10.0);
    assert!(grid.query(10.0, 10.0, 1.0).contains(&key));

    if let Some(Shape::Circle(circle)) = world.get_mut(key) {
        circle.set_center(Point2::new(300.0, 300.0));
    }
    let mut moved = world[key].clone();
    assert_eq!(moved.center(), Point2::new(300.0, 300.0));

    grid.update(key, 300.0, 300.0);
    assert!(!grid.query(10.0, 10.0, 1.0).contains(&key));
    assert!(grid.query(300.0, 300.0, 1.0).contains(&key));
}
