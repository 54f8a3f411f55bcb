//! Core animation module - cooperative, deterministic and testable
//!
//! This crate contains the animation engine: a single-threaded scheduler
//! that advances many independent visual tasks in lockstep with a terminal
//! refresh. It has **no dependencies** on any terminal library; everything
//! it draws or reads goes through the [`Display`] trait.
//!
//! - **Deterministic**: every task owns a seeded [`SimpleRng`]; the same seed
//!   reproduces the same scene
//! - **Testable**: [`MemoryDisplay`] records every cell, key and alert
//! - **Cooperative**: tasks are explicit state machines stepped once per tick
//!
//! # Module Structure
//!
//! - [`display`]: the display capability, playfield bounds and an in-memory display
//! - [`input`]: folds queued keys into one [`Intent`](types::Intent) per tick
//! - [`sprite`]: multi-row text sprites and frame animations
//! - [`rng`]: per-task pseudo-random numbers
//! - [`task`]: the task trait and per-step context
//! - [`blink`], [`projectile`], [`spaceship`]: the three task kinds
//! - [`scheduler`]: the tick loop
//! - [`scene`], [`config`]: assembling a full scene from settings
//!
//! # Tick Order
//!
//! 1. Drain input and resolve one intent
//! 2. Step every alive task once, in insertion order
//! 3. Drop tasks that reported [`TaskStatus::Finished`](types::TaskStatus)
//! 4. Commit one redraw
//! 5. Sleep for the rest of the tick interval
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use starfield_core::{MemoryDisplay, Projectile, Scheduler, StopSignal};
//! use starfield_core::types::Position;
//!
//! let mut display = MemoryDisplay::new(20, 40);
//! let mut scheduler = Scheduler::new(Duration::ZERO);
//! scheduler.spawn(Box::new(Projectile::new(Position::new(10.0, 20.0), -1.0, 0.0)));
//!
//! // The shot leaves the playfield, the scheduler empties and `run` returns.
//! scheduler.run(&mut display, &StopSignal::new());
//! assert!(scheduler.is_empty());
//! assert_eq!(display.alerts(), 1);
//! ```

pub mod blink;
pub mod config;
pub mod display;
pub mod input;
pub mod projectile;
pub mod rng;
pub mod scene;
pub mod scheduler;
pub mod spaceship;
pub mod sprite;
pub mod task;

pub use starfield_types as types;

// Re-export commonly used types for convenience
pub use blink::{Blink, BlinkPhase};
pub use config::SceneConfig;
pub use display::{Display, MemoryCell, MemoryDisplay, Playfield};
pub use input::{read_controls, resolve};
pub use projectile::Projectile;
pub use rng::SimpleRng;
pub use scene::build_scene;
pub use scheduler::{Scheduler, StopSignal};
pub use spaceship::{AxisLimits, Spaceship};
pub use sprite::{Animation, AssetError, Sprite};
pub use task::{Task, TickContext};
