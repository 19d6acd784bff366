pub mod cards;
pub mod guard;
pub mod layout;
pub mod theme;
