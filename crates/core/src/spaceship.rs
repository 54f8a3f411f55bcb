//! Spaceship controller: the player-steered sprite.
//!
//! Every tick the ship erases what it drew last tick, applies the tick's
//! intent with edge clamping, and stamps the current animation frame at the
//! new position. It never finishes.

use crate::display::Playfield;
use crate::projectile::Projectile;
use crate::sprite::Animation;
use crate::task::{Task, TickContext};
use crate::types::{Position, TaskStatus, BORDER, PROJECTILE_ROW_SPEED};

/// Movement limits along one axis.
///
/// Strictly between `low` and `high` the ship moves freely; at or beyond an
/// edge it may only move back towards the interior. A free move never takes
/// the origin further than `extent - 1` cells past an edge, so at least one
/// column (or row) of the frame stays inside the border.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisLimits {
    pub low: f64,
    pub high: f64,
    overhang: f64,
}

impl AxisLimits {
    pub fn new(low: f64, high: f64, extent: usize) -> Self {
        Self {
            low,
            high,
            overhang: extent.saturating_sub(1) as f64,
        }
    }

    /// Apply `direction * speed` to `position`, honouring the edges.
    pub fn apply(&self, position: f64, direction: i8, speed: f64) -> f64 {
        let direction = direction.signum();
        if self.low < position && position < self.high {
            (position + direction as f64 * speed)
                .max(self.low - self.overhang)
                .min(self.high + self.overhang)
        } else if position <= self.low {
            if direction > 0 {
                position + speed
            } else {
                position
            }
        } else if direction < 0 {
            position - speed
        } else {
            position
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spaceship {
    position: Position,
    speed: f64,
    animation: Animation,
    rows: AxisLimits,
    columns: AxisLimits,
    frame_tick: u64,
    /// Frame index and origin of the sprite currently on screen.
    drawn: Option<(usize, Position)>,
    multi_shot: bool,
}

impl Spaceship {
    pub fn new(start: Position, speed: f64, animation: Animation, playfield: Playfield) -> Self {
        let (frame_rows, frame_columns) = animation.size();
        let rows = AxisLimits::new(
            BORDER,
            (playfield.max_row as f64) - frame_rows as f64,
            frame_rows,
        );
        let columns = AxisLimits::new(
            BORDER,
            (playfield.max_column as f64) - frame_columns as f64,
            frame_columns,
        );
        Self {
            position: start,
            speed,
            animation,
            rows,
            columns,
            frame_tick: 0,
            drawn: None,
            multi_shot: false,
        }
    }

    /// Spawn a projectile from the nose on every tick with fire intent.
    pub fn with_multi_shot(mut self, enabled: bool) -> Self {
        self.multi_shot = enabled;
        self
    }

    pub fn position(&self) -> Position {
        self.position
    }

    fn nose(&self) -> Position {
        let (_, frame_columns) = self.animation.size();
        Position::new(
            self.position.row - 1.0,
            self.position.column + (frame_columns / 2) as f64,
        )
    }
}

impl Task for Spaceship {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        if let Some((index, at)) = self.drawn.take() {
            if let Some(frame) = self.animation.frame(index) {
                frame.erase(ctx.display, at.row, at.column);
            }
        }

        self.position.row = self
            .rows
            .apply(self.position.row, ctx.intent.row_direction, self.speed);
        self.position.column =
            self.columns
                .apply(self.position.column, ctx.intent.column_direction, self.speed);

        let index = self.animation.index_at(self.frame_tick);
        self.frame_tick += 1;
        if let Some(frame) = self.animation.frame(index) {
            frame.stamp(ctx.display, self.position.row, self.position.column);
            self.drawn = Some((index, self.position));
        }

        if self.multi_shot && ctx.intent.fire {
            ctx.spawn(Box::new(Projectile::new(
                self.nose(),
                PROJECTILE_ROW_SPEED,
                0.0,
            )));
        }

        TaskStatus::Running
    }

    fn name(&self) -> &'static str {
        "spaceship"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemoryDisplay;
    use crate::sprite::Sprite;
    use crate::types::{Intent, SPACESHIP_FRAME_TICKS, SPACESHIP_SPEED};

    fn animation() -> Animation {
        Animation::new(
            vec![Sprite::parse(" ^ \n/A\\\n v "), Sprite::parse(" ^ \n/A\\\n w ")],
            SPACESHIP_FRAME_TICKS,
        )
    }

    fn step(ship: &mut Spaceship, d: &mut MemoryDisplay, intent: Intent, tick: u64) -> usize {
        let playfield = Playfield::of(&*d);
        let mut spawned = Vec::new();
        let mut ctx = TickContext::new(&mut *d, playfield, intent, tick, &mut spawned);
        assert_eq!(ship.step(&mut ctx), TaskStatus::Running);
        spawned.len()
    }

    fn intent(row: i8, col: i8) -> Intent {
        Intent {
            row_direction: row,
            column_direction: col,
            fire: false,
        }
    }

    #[test]
    fn interior_moves_by_exactly_speed() {
        let limits = AxisLimits::new(1.0, 30.0, 5);
        for pos in [2.0, 10.5, 29.0] {
            assert_eq!(limits.apply(pos, 1, 5.0), pos + 5.0);
            assert_eq!(limits.apply(pos, -1, 5.0), pos - 5.0);
            assert_eq!(limits.apply(pos, 0, 5.0), pos);
        }
    }

    #[test]
    fn lower_edge_only_allows_inward() {
        let limits = AxisLimits::new(1.0, 30.0, 5);
        assert_eq!(limits.apply(1.0, -1, 5.0), 1.0);
        assert_eq!(limits.apply(-3.0, -1, 5.0), -3.0);
        assert_eq!(limits.apply(1.0, 1, 5.0), 6.0);
    }

    #[test]
    fn upper_edge_only_allows_inward() {
        let limits = AxisLimits::new(1.0, 30.0, 5);
        assert_eq!(limits.apply(30.0, 1, 5.0), 30.0);
        assert_eq!(limits.apply(33.0, 1, 5.0), 33.0);
        assert_eq!(limits.apply(30.0, -1, 5.0), 25.0);
    }

    #[test]
    fn free_move_stops_with_one_column_inside() {
        let limits = AxisLimits::new(1.0, 68.0, 5);
        assert_eq!(limits.apply(1.5, -1, 5.0), -3.0);
        assert_eq!(limits.apply(67.5, 1, 5.0), 72.0);
        assert_eq!(limits.apply(-3.0, -1, 5.0), -3.0);
    }

    #[test]
    fn ship_pushed_past_an_edge_stays_visible() {
        let mut d = MemoryDisplay::new(30, 74);
        let bar = Animation::new(vec![Sprite::parse("<===>")], SPACESHIP_FRAME_TICKS);
        let mut ship = Spaceship::new(
            Position::new(10.0, 1.5),
            SPACESHIP_SPEED,
            bar.clone(),
            Playfield::of(&d),
        );
        for tick in 0..3 {
            step(&mut ship, &mut d, intent(0, -1), tick);
            assert_eq!(ship.position().column, -3.0);
            assert_eq!(d.symbol(10, 1), Some('>'));
        }

        let mut d = MemoryDisplay::new(30, 74);
        let mut ship = Spaceship::new(
            Position::new(10.0, 67.5),
            SPACESHIP_SPEED,
            bar,
            Playfield::of(&d),
        );
        step(&mut ship, &mut d, intent(0, 1), 0);
        assert_eq!(ship.position().column, 72.0);
        assert_eq!(d.symbol(10, 72), Some('<'));
    }

    #[test]
    fn limits_use_matching_axis_extent() {
        let d = MemoryDisplay::new(40, 100);
        let ship = Spaceship::new(
            Position::new(10.0, 10.0),
            SPACESHIP_SPEED,
            animation(),
            Playfield::of(&d),
        );
        assert_eq!(ship.rows.high, 39.0 - 3.0);
        assert_eq!(ship.columns.high, 99.0 - 3.0);
    }

    #[test]
    fn moves_on_one_axis_only() {
        let mut d = MemoryDisplay::new(40, 80);
        let mut ship = Spaceship::new(
            Position::new(20.0, 40.0),
            SPACESHIP_SPEED,
            animation(),
            Playfield::of(&d),
        );
        step(&mut ship, &mut d, intent(0, 1), 0);
        assert_eq!(ship.position(), Position::new(20.0, 45.0));
        step(&mut ship, &mut d, intent(-1, 0), 1);
        assert_eq!(ship.position(), Position::new(15.0, 45.0));
    }

    #[test]
    fn redraw_leaves_no_trail() {
        let mut d = MemoryDisplay::new(40, 80);
        let mut ship = Spaceship::new(
            Position::new(20.0, 40.0),
            SPACESHIP_SPEED,
            animation(),
            Playfield::of(&d),
        );
        for tick in 0..3 {
            step(&mut ship, &mut d, intent(1, -1), tick);
            assert_eq!(d.find('A').len(), 1);
            assert_eq!(d.find('^').len(), 1);
        }
        let (row, col) = ship.position().rounded();
        assert_eq!(d.symbol(row + 1, col + 1), Some('A'));
    }

    #[test]
    fn frames_alternate_every_two_ticks() {
        let mut d = MemoryDisplay::new(40, 80);
        let mut ship = Spaceship::new(
            Position::new(20.0, 40.0),
            SPACESHIP_SPEED,
            animation(),
            Playfield::of(&d),
        );
        let mut seen = Vec::new();
        for tick in 0..8 {
            step(&mut ship, &mut d, Intent::NEUTRAL, tick);
            seen.push(d.symbol(22, 41).unwrap());
        }
        assert_eq!(seen, vec!['v', 'v', 'w', 'w', 'v', 'v', 'w', 'w']);
    }

    #[test]
    fn fire_spawns_only_with_multi_shot() {
        let mut d = MemoryDisplay::new(40, 80);
        let fire = Intent {
            fire: true,
            ..Intent::NEUTRAL
        };
        let mut single = Spaceship::new(
            Position::new(20.0, 40.0),
            SPACESHIP_SPEED,
            animation(),
            Playfield::of(&d),
        );
        assert_eq!(step(&mut single, &mut d, fire, 0), 0);

        let mut multi = single.clone().with_multi_shot(true);
        assert_eq!(step(&mut multi, &mut d, fire, 1), 1);
        assert_eq!(step(&mut multi, &mut d, Intent::NEUTRAL, 2), 0);
    }
}
