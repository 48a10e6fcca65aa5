// Task-Modul: Enthält alle Embassy Tasks
//
// Tasks kommunizieren nur über den geteilten `KioskState`
// (Screen-Signal, Benutzer, Gewicht, Adresse).

pub mod display;
pub mod wifi;

// Re-export Tasks für einfachen Import
pub use display::display_task;
pub use wifi::{link_supervisor_task, net_task};
