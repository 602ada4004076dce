// Task-Modul: Enthält die Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.

pub mod led_breath;

// Re-export Tasks für einfachen Import
pub use led_breath::led_breath_task;
