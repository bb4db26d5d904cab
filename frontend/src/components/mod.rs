pub mod drawn_history_modal;
pub mod firefly_particles;
pub mod power_button;
pub mod power_meter;

pub use drawn_history_modal::DrawnHistoryModal;
pub use firefly_particles::FireflyParticles;
pub use power_button::{ButtonColor, SpinPowerButton};
pub use power_meter::PowerMeter;
