//! Scene assembly: seeds the starfield, the baseline shot and the spaceship.

use tracing::info;

use crate::blink::Blink;
use crate::config::SceneConfig;
use crate::display::Playfield;
use crate::projectile::Projectile;
use crate::rng::SimpleRng;
use crate::scheduler::Scheduler;
use crate::spaceship::Spaceship;
use crate::sprite::{Animation, Sprite};
use crate::types::{
    Position, PROJECTILE_COLUMN_SPEED, PROJECTILE_ROW_SPEED, SPACESHIP_FRAME_TICKS,
    SPACESHIP_SPEED, STAR_SYMBOLS,
};

/// Launch point of the baseline projectile.
pub fn launch_position(playfield: Playfield) -> Position {
    Position::new(
        playfield.max_row as f64 / 2.0,
        playfield.max_column as f64 / 2.0 + 2.0,
    )
}

/// Starting point of the spaceship.
pub fn spaceship_start(playfield: Playfield) -> Position {
    Position::new(
        playfield.max_row as f64 / 2.0,
        playfield.max_column as f64 / 2.0,
    )
}

/// Build the scheduler for a full scene.
///
/// Task order: stars, then the projectile, then the spaceship, so the ship
/// is drawn last and stays on top.
pub fn build_scene(config: &SceneConfig, playfield: Playfield, frames: Vec<Sprite>) -> Scheduler {
    let mut rng = SimpleRng::new(config.seed);
    let mut scheduler = Scheduler::new(config.tick_interval());

    // Stars go strictly inside the border; a 1-cell field has no interior.
    let inner_rows = (playfield.max_row - 1).max(0) as u32;
    let inner_columns = (playfield.max_column - 1).max(0) as u32;
    if inner_rows > 0 && inner_columns > 0 {
        for _ in 0..config.star_count {
            let row = 1 + rng.next_range(inner_rows) as i32;
            let column = 1 + rng.next_range(inner_columns) as i32;
            let symbol = rng.choose(&STAR_SYMBOLS).copied().unwrap_or('*');
            scheduler.spawn(Box::new(Blink::new(row, column, symbol, rng.fork())));
        }
    }

    scheduler.spawn(Box::new(Projectile::new(
        launch_position(playfield),
        PROJECTILE_ROW_SPEED,
        PROJECTILE_COLUMN_SPEED,
    )));

    let animation = Animation::new(frames, SPACESHIP_FRAME_TICKS);
    scheduler.spawn(Box::new(
        Spaceship::new(
            spaceship_start(playfield),
            SPACESHIP_SPEED,
            animation,
            playfield,
        )
        .with_multi_shot(config.multi_shot),
    ));

    info!(
        rows = playfield.rows,
        columns = playfield.columns,
        stars = config.star_count,
        seed = config.seed,
        multi_shot = config.multi_shot,
        "scene built"
    );
    scheduler
}
