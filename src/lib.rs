#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::struct_field_names,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod catalog;
pub mod config;
pub mod core;
pub mod error;
#[doc(hidden)]
pub mod observability;
pub mod ui;

pub use config::Config;
pub use core::training::{
    ACCEPT_ALL, Entity, EntityScore, RankOrder, SharedTrainingSession, TrainingSession,
};
pub use error::{Result, TagmatchError, TrainingError};
