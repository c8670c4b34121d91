pub mod log_observer;
