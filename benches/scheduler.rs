use criterion::{black_box, criterion_group, criterion_main, Criterion};
use starfield::core::{build_scene, resolve, MemoryDisplay, Playfield, SceneConfig, Sprite};
use starfield::types::Key;

fn frames() -> Vec<Sprite> {
    vec![
        Sprite::parse("  .  \n .'. \n |o| \n.'o'.\n|.-.|\n'   '\n  (  \n   ) \n  (  "),
        Sprite::parse("  .  \n .'. \n |o| \n.'o'.\n|.-.|\n'   '\n   ) \n  (  \n   ) "),
    ]
}

fn bench_scene_tick(c: &mut Criterion) {
    let config = SceneConfig {
        seed: 12345,
        ..SceneConfig::default()
    };
    let mut display = MemoryDisplay::new(50, 200);
    let mut scheduler = build_scene(&config, Playfield::of(&display), frames());

    c.bench_function("scene_tick_100_stars", |b| {
        b.iter(|| {
            black_box(scheduler.tick(&mut display));
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let keys = [Key::Up, Key::Left, Key::Char(' '), Key::Other, Key::Down];

    c.bench_function("resolve_5_keys", |b| {
        b.iter(|| resolve(black_box(keys)))
    });
}

fn bench_sprite_stamp(c: &mut Criterion) {
    let sprite = frames().remove(0);
    let mut display = MemoryDisplay::new(50, 200);

    c.bench_function("sprite_stamp_erase", |b| {
        b.iter(|| {
            sprite.stamp(&mut display, black_box(20.0), black_box(100.0));
            sprite.erase(&mut display, black_box(20.0), black_box(100.0));
        })
    });
}

criterion_group!(benches, bench_scene_tick, bench_resolve, bench_sprite_stamp);
criterion_main!(benches);
