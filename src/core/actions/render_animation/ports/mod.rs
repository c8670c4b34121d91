pub mod render_observer;
