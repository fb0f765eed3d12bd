pub mod clock;
pub mod info;
pub mod plot;
