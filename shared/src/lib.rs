pub mod constants;
pub mod error;
pub mod tuning;
pub mod draw_model;
pub mod drawn_store;
pub mod power_charger;
pub mod spin_wheel;
pub mod draw_session;
pub mod persistence;
pub mod validation;

pub use draw_model::{CategoryConfig, DrawResult, Token};
pub use draw_session::{DrawSession, RoundEvent, RoundStatus, SessionEvent, WheelKind};
pub use drawn_store::{DrawnSet, DrawnStore};
pub use error::{CoreResult, DrawError};
pub use tuning::DrawTuning;
