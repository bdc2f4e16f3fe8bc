//! Browser-independent core of the setup guide page.
//!
//! The web shell measures the DOM, turns events into [`PageAction`]s and
//! carries out the [`PageEffect`]s that [`PageController::apply`] returns.

pub mod commands;
pub mod confetti;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod section;
pub mod throttle;
pub mod transient;

pub use commands::{IMAGE_COMMANDS, ImageCommand, ModalPanels, command_for_image};
pub use confetti::{CONFETTI_KEYFRAMES, CONFETTI_PALETTE, ConfettiParticle};
pub use config::GuideConfig;
pub use controller::{ButtonTarget, LogLevel, LogLine, PageAction, PageController, PageEffect};
pub use error::GuideError;
pub use input::KeyCommand;
pub use section::{NavDirection, ScrollSnapshot, Section, SectionSpan, nav_button_targets};
pub use throttle::Throttle;
pub use transient::{Lifetime, Notification, completion_modal_lifetime, confetti_lifetime};
