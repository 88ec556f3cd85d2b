// Brief form module for BRANDKIT UI.

pub mod controller;
pub mod widgets;

pub use controller::FormController;
