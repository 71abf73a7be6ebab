//! Value Object Module

pub mod banner_move;
pub mod counter;
pub mod item_name;
pub mod logo_kind;
pub mod sort_field;
