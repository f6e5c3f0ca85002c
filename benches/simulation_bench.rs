use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadphys::{
    collision::{QuadTree, QuadTreeConfig, AABB},
    math::vec2::Vec2,
    objects::RigidBody,
    shapes::Polygon,
    world::{World, WorldConfig},
};

// --- Helper for building a pile of boxes on a floor ---
fn build_pile(world: &mut World, num_boxes: usize) {
    let floor = Polygon::rectangle(200.0, 5.0).unwrap();
    world.add_rigid_body("floor", RigidBody::new_static(Vec2::new(0.0, -5.0), floor));

    let crate_shape = Polygon::rectangle(1.0, 1.0).unwrap();
    let per_row = 40;
    for i in 0..num_boxes {
        let x = (i % per_row) as f64 * 2.5 - 50.0;
        let y = 1.5 + (i / per_row) as f64 * 2.1;
        let body = RigidBody::new(Vec2::new(x, y), crate_shape.clone(), 1.0)
            .unwrap()
            .with_linear_velocity(Vec2::new(0.0, -5.0));
        world.add_rigid_body(format!("box-{i}"), body);
    }
}

// Benchmark for a pile of boxes settling onto a static floor
fn bench_polygon_pile(c: &mut Criterion) {
    let mut group = c.benchmark_group("polygon_pile");

    for num_boxes in [10, 100, 500].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_boxes), num_boxes, |b, &n| {
            b.iter(|| {
                let mut world = World::default();
                build_pile(&mut world, black_box(n));
                let dt = 1.0 / 60.0;
                for _ in 0..30 {
                    world.step(black_box(dt));
                }
            });
        });
    }
    group.finish();
}

// Benchmark for clearing and refilling the quad-tree, as every step does
fn bench_quad_tree_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("quad_tree_rebuild");
    let config = WorldConfig::default();

    for count in [100, 1000, 5000].iter() {
        let boxes: Vec<AABB> = (0..*count)
            .map(|i| {
                let x = (i % 100) as f64 * 20.0 - 1000.0;
                let y = (i / 100) as f64 * 20.0 - 1000.0;
                AABB::from_center(Vec2::new(x, y), Vec2::new(4.0, 4.0))
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(count), &boxes, |b, boxes| {
            let mut tree = QuadTree::new(config.bounds, QuadTreeConfig::default()).unwrap();
            b.iter(|| {
                tree.clear();
                for (handle, aabb) in boxes.iter().enumerate() {
                    tree.insert(handle, *aabb);
                }
                black_box(tree.retrieve(&boxes[0]).len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polygon_pile, bench_quad_tree_rebuild);
criterion_main!(benches);
