use criterion::*;
use sketchit::author::memory::MemoryHost;
use sketchit::*;

fn square(size: usize) -> Vec<Coordinate> {
    (0..size)
        .map(|x| (0.0, x as f64))
        .chain((0..size).map(|x| (x as f64, size as f64)))
        .chain((0..size).rev().map(|x| (size as f64, x as f64)))
        .chain((1..size).rev().map(|x| (x as f64, 0.0)))
        .map(ToCoordinate::to_coord)
        .collect()
}

fn walls(c: &mut Criterion) {
    c.bench_function("segments small wall", |b| {
        let pts = square(1);
        b.iter(|| segments(&pts))
    });
    c.bench_function("segments large wall", |b| {
        let pts = square(100);
        b.iter(|| segments(&pts))
    });
}

fn buildings(c: &mut Criterion) {
    fn building(storeys: usize) -> Building {
        Building::new(
            (0..storeys).map(|l| Wall::new(l, square(25))).collect(),
            (0..storeys)
                .map(|l| Level::with_category(l as f64 * 3.5, "Office"))
                .collect(),
        )
    }
    c.bench_function("describe 50 storeys", |b| {
        let building = building(50);
        b.iter(|| building.describe().to_string())
    });
    c.bench_function("convert 50 storeys", |b| {
        let building = building(50);
        let options = ConvertOptions::default();
        b.iter(|| building.convert(Some(&mut MemoryHost::new()), &options))
    });
}

criterion_group!(benches, walls, buildings);
criterion_main!(benches);
