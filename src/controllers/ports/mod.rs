pub mod animation_presenter;
