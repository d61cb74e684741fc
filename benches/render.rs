use bodsfeed::fleet::{Fleet, FleetConfig};
use bodsfeed::siri::{SiriConfig, render_vehicle_monitoring};
use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn render_fleet(c: &mut Criterion) {
    let config = SiriConfig::default();
    let now = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 10).unwrap();

    let fleet = Fleet::new(&FleetConfig::default());
    let vehicles = fleet.positions(now);
    c.bench_function("render_ten_vehicles", |b| {
        b.iter(|| black_box(render_vehicle_monitoring(&vehicles, now, &config).unwrap()))
    });

    let large = Fleet::new(&FleetConfig {
        vehicle_count: 500,
        ..Default::default()
    });
    let vehicles = large.positions(now);
    c.bench_function("render_five_hundred_vehicles", |b| {
        b.iter(|| black_box(render_vehicle_monitoring(&vehicles, now, &config).unwrap()))
    });
}

criterion_group!(benches, render_fleet);
criterion_main!(benches);
