use criterion::{Criterion, black_box, criterion_group, criterion_main};
use room_planner::model::presets::{studio_fixtures, studio_furniture, studio_room, studio_structure};
use room_planner::{EditorConfig, LayoutEditor, Point, SnapConfig, SnapResolver, TemplateCatalog};

fn snap_cascade(c: &mut Criterion) {
    let room = studio_room();
    let fixtures = studio_fixtures();
    let furniture = studio_furniture();
    let resolver = SnapResolver::new(SnapConfig::default());
    let item = furniture[0].clone();

    c.bench_function("snap_cascade_studio", |b| {
        b.iter(|| {
            resolver.resolve(
                black_box(61.3),
                black_box(97.8),
                &item,
                &furniture,
                &fixtures,
                &room,
            )
        });
    });
}

fn scripted_drag_session(c: &mut Criterion) {
    let path: Vec<Point> = (0..120)
        .map(|step| {
            let t = f64::from(step);
            Point::new(20.0 + t * 0.9, 40.0 + (t * 0.1).sin() * 30.0)
        })
        .collect();

    c.bench_function("drag_session_chair", |b| {
        b.iter(|| {
            let mut editor = LayoutEditor::new(
                studio_structure(),
                studio_furniture(),
                TemplateCatalog::new(studio_furniture()),
                EditorConfig::default(),
            );
            if editor.begin_drag("chair", Point::new(10.0, 160.0)).is_err() {
                return;
            }
            for point in &path {
                editor.pointer_move(black_box(*point));
            }
            editor.end_drag();
            editor.undo();
        });
    });
}

criterion_group!(benches, snap_cascade, scripted_drag_session);
criterion_main!(benches);
