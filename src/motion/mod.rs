pub mod anim;
pub mod counter;
pub mod effects;
pub mod scroll;
pub mod visibility;
