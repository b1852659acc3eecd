use std::sync::Arc;

use bubble_tabbar_core::{
    ColorScheme, DescriptorMap, EmitResult, NavigationEvent, NavigationHost, NavigationState,
    Route, TabBar, TabBarInput, TabOptions,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use hashbrown::HashMap;

struct StaticHost;

impl NavigationHost for StaticHost {
    fn emit(&mut self, _event: &NavigationEvent) -> EmitResult {
        EmitResult::default()
    }

    fn navigate(&mut self, _route_name: &str) {}

    fn color_scheme(&self) -> ColorScheme {
        ColorScheme::Light
    }
}

fn input(tab_count: usize) -> TabBarInput {
    let routes: Vec<Route> = (0..tab_count)
        .map(|i| Route::new(format!("tab{i}-key"), format!("tab{i}")))
        .collect();
    let descriptors: HashMap<String, TabOptions> = routes
        .iter()
        .map(|r| {
            let options = TabOptions {
                title: Some(format!("Title {}", r.name)),
                ..Default::default()
            };
            (r.key.clone(), options)
        })
        .collect();
    let descriptors: DescriptorMap = Arc::new(descriptors);
    TabBarInput::new(NavigationState::new(routes, 0), descriptors, 400.0)
}

fn bench_tick(c: &mut Criterion) {
    let host = StaticHost;
    for tab_count in [3usize, 5, 8] {
        let base = input(tab_count);
        c.bench_function(&format!("focus_change_settle_{tab_count}_tabs"), |b| {
            b.iter_batched(
                || {
                    let mut bar = TabBar::default();
                    bar.update(&base, &host);
                    bar.update(&base.with_index(1), &host);
                    bar
                },
                |mut bar| {
                    while bar.tick(black_box(1.0 / 60.0)) {}
                    black_box(bar.frame());
                },
                BatchSize::SmallInput,
            )
        });
    }
}

fn bench_frame(c: &mut Criterion) {
    let host = StaticHost;
    let base = input(5);
    let mut bar = TabBar::default();
    bar.update(&base, &host);
    bar.update(&base.with_index(2), &host);
    bar.tick(0.05);
    c.bench_function("frame_mid_animation_5_tabs", |b| {
        b.iter(|| black_box(bar.frame()))
    });
}

criterion_group!(benches, bench_tick, bench_frame);
criterion_main!(benches);
