pub mod use_frame_clock;
pub mod use_setup_form;

pub use use_frame_clock::*;
pub use use_setup_form::*;
