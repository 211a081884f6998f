//! Text helpers shared by more than one conversion routine.

pub mod attributes;
pub mod entities;
pub mod text;
