//! Presentational building blocks shared by the screens.
//!
//! These take display props and fire callbacks; they hold no state of their own.

mod avatar;
mod badge;
mod button;
mod card;
mod input;
mod progress;

pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use input::Input;
pub use progress::ProgressBar;
