use std::error::Error;
use std::path::Path;

use crate::core::data::animation::Animation;

pub trait AnimationPresenterPort {
    type Error: Error + 'static;

    fn present(&self, animation: &Animation, filepath: impl AsRef<Path>) -> Result<(), Self::Error>;
}
