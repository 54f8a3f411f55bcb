//! Projectile: a single shot flying at constant velocity until it leaves the
//! playfield interior.

use crate::task::{Task, TickContext};
use crate::types::{Attribute, Position, TaskStatus, FLASH_SYMBOL, MUZZLE_SYMBOL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Next step draws the muzzle symbol and raises the alert.
    Launch,
    /// Next step replaces the muzzle with the flash symbol.
    Flash,
    /// Next step erases the drawn cell and advances.
    Flying,
    Done,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Position,
    row_speed: f64,
    column_speed: f64,
    stage: Stage,
    /// Cell currently holding this projectile's symbol, if any.
    drawn: Option<(i32, i32)>,
}

impl Projectile {
    pub fn new(start: Position, row_speed: f64, column_speed: f64) -> Self {
        Self {
            position: start,
            row_speed,
            column_speed,
            stage: Stage::Launch,
            drawn: None,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// `'-'` for horizontal travel, `'|'` otherwise.
    pub fn travel_symbol(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    fn erase(&mut self, ctx: &mut TickContext<'_>) {
        if let Some((row, col)) = self.drawn.take() {
            ctx.display.clear(row, col);
        }
    }

    fn draw(&mut self, ctx: &mut TickContext<'_>, symbol: char) {
        let (row, col) = self.position.rounded();
        ctx.display.place(row, col, symbol, Attribute::Normal);
        self.drawn = Some((row, col));
    }
}

impl Task for Projectile {
    fn step(&mut self, ctx: &mut TickContext<'_>) -> TaskStatus {
        match self.stage {
            Stage::Launch => {
                ctx.display.alert();
                self.draw(ctx, MUZZLE_SYMBOL);
                self.stage = Stage::Flash;
                TaskStatus::Running
            }
            Stage::Flash => {
                self.draw(ctx, FLASH_SYMBOL);
                self.stage = Stage::Flying;
                TaskStatus::Running
            }
            Stage::Flying => {
                self.erase(ctx);
                self.position = self.position.offset(self.row_speed, self.column_speed);

                let (row, col) = self.position.rounded();
                if ctx.playfield.contains_strictly(row, col) {
                    let symbol = self.travel_symbol();
                    self.draw(ctx, symbol);
                    TaskStatus::Running
                } else {
                    self.stage = Stage::Done;
                    TaskStatus::Finished
                }
            }
            Stage::Done => TaskStatus::Finished,
        }
    }

    fn name(&self) -> &'static str {
        "projectile"
    }
}
