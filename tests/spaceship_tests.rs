//! Steering the bundled rocket into every edge of the playfield.

use std::path::Path;
use std::time::Duration;

use starfield::core::scene::spaceship_start;
use starfield::core::{Animation, MemoryDisplay, Playfield, Scheduler, Spaceship, Sprite};
use starfield::types::{Key, SPACESHIP_FRAME_TICKS, SPACESHIP_SPEED};

fn rocket() -> Animation {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets");
    let frames = ["rocket_frame_1.txt", "rocket_frame_2.txt"]
        .iter()
        .map(|name| Sprite::load(dir.join(name)).unwrap())
        .collect();
    Animation::new(frames, SPACESHIP_FRAME_TICKS)
}

/// Non-blank cells strictly inside the border.
fn interior_cells(display: &MemoryDisplay, playfield: Playfield) -> usize {
    let mut count = 0;
    for row in 1..playfield.max_row {
        for col in 1..playfield.max_column {
            if display.symbol(row, col) != Some(' ') {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_ship_stays_visible_at_every_edge() {
    let mut display = MemoryDisplay::new(30, 74);
    let playfield = Playfield::of(&display);
    let mut scheduler = Scheduler::new(Duration::ZERO);
    scheduler.spawn(Box::new(Spaceship::new(
        spaceship_start(playfield),
        SPACESHIP_SPEED,
        rocket(),
        playfield,
    )));

    let legs = [(Key::Left, 15), (Key::Up, 15), (Key::Right, 25), (Key::Down, 15)];
    for (key, ticks) in legs {
        for tick in 0..ticks {
            display.push_key(key);
            scheduler.tick(&mut display);
            assert!(
                interior_cells(&display, playfield) > 0,
                "ship vanished after {:?} #{}",
                key,
                tick
            );
        }
    }
}

#[test]
fn test_ship_steers_back_in_from_an_edge() {
    let mut display = MemoryDisplay::new(30, 74);
    let playfield = Playfield::of(&display);
    let mut scheduler = Scheduler::new(Duration::ZERO);
    scheduler.spawn(Box::new(Spaceship::new(
        spaceship_start(playfield),
        SPACESHIP_SPEED,
        rocket(),
        playfield,
    )));

    for _ in 0..10 {
        display.push_key(Key::Left);
        scheduler.tick(&mut display);
    }
    let at_edge = interior_cells(&display, playfield);
    for _ in 0..2 {
        display.push_key(Key::Right);
        scheduler.tick(&mut display);
    }
    assert!(interior_cells(&display, playfield) > at_edge);
}
