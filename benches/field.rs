use criterion::{black_box, criterion_group, criterion_main, Criterion};
use distfield::{
    color_edges_simple, correct_errors, generate_msdf, Contour, EdgeSegment, MsdfParams, PixelRect,
    Pixmap, Rgb, Shape, Vec2,
};

const KAPPA: f64 = 0.552_284_749_830_793_4;

fn ring_contour(center: Vec2, radius: f64) -> Contour {
    let k = KAPPA * radius;
    let e = Vec2::new(center.x + radius, center.y);
    let n = Vec2::new(center.x, center.y + radius);
    let w = Vec2::new(center.x - radius, center.y);
    let s = Vec2::new(center.x, center.y - radius);
    let mut contour = Contour::new();
    contour.add_edge(EdgeSegment::cubic(
        e,
        Vec2::new(e.x, e.y + k),
        Vec2::new(n.x + k, n.y),
        n,
    ));
    contour.add_edge(EdgeSegment::cubic(
        n,
        Vec2::new(n.x - k, n.y),
        Vec2::new(w.x, w.y + k),
        w,
    ));
    contour.add_edge(EdgeSegment::cubic(
        w,
        Vec2::new(w.x, w.y - k),
        Vec2::new(s.x - k, s.y),
        s,
    ));
    contour.add_edge(EdgeSegment::cubic(
        s,
        Vec2::new(s.x + k, s.y),
        Vec2::new(e.x, e.y - k),
        e,
    ));
    contour
}

fn build_annulus() -> Shape {
    let mut shape = Shape::new();
    shape.add_contour(ring_contour(Vec2::new(16.0, 16.0), 12.0));
    // Square hole with sharp corners.
    let corners = [
        Vec2::new(11.0, 11.0),
        Vec2::new(11.0, 21.0),
        Vec2::new(21.0, 21.0),
        Vec2::new(21.0, 11.0),
    ];
    let mut hole = Contour::new();
    for i in 0..4 {
        hole.add_edge(EdgeSegment::line(corners[i], corners[(i + 1) % 4]));
    }
    shape.add_contour(hole);
    shape
}

fn bench_generate_msdf(c: &mut Criterion) {
    let mut shape = build_annulus();
    color_edges_simple(&mut shape, std::f64::consts::FRAC_PI_3, 0);
    let params = MsdfParams {
        range: 6.0,
        ..Default::default()
    };

    c.bench_function("generate_msdf_32x32_annulus", |b| {
        let mut output = Pixmap::<Rgb<f32>>::new(32, 32);
        b.iter(|| {
            generate_msdf(
                black_box(&mut output),
                black_box(&shape),
                PixelRect::of_size(32, 32),
                &params,
            );
            black_box(output.data().len());
        });
    });

    c.bench_function("correct_errors_32x32_annulus", |b| {
        let mut output = Pixmap::<Rgb<f32>>::new(32, 32);
        generate_msdf(&mut output, &shape, PixelRect::of_size(32, 32), &params);
        b.iter(|| {
            let mut field = output.clone();
            correct_errors(
                black_box(&mut field),
                PixelRect::of_size(32, 32),
                Vec2::new(0.15, 0.15),
            );
            black_box(field.data().len());
        });
    });
}

criterion_group!(benches, bench_generate_msdf);
criterion_main!(benches);
