//! Form controller state machine

mod controller;


pub use controller::{FormController, FormPhase, SubmitReceipt};
