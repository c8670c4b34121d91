use std::error::Error;
use std::path::Path;

use crate::controllers::ports::animation_presenter::AnimationPresenterPort;
use crate::core::actions::render_animation::ports::render_observer::RenderObserver;
use crate::core::actions::render_animation::render_animation::render_animation;
use crate::core::data::animation::Animation;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

pub struct AnimationController<P: AnimationPresenterPort, O: RenderObserver> {
    presenter: P,
    observer: O,
    animation: Option<Animation>,
}

impl<P: AnimationPresenterPort, O: RenderObserver> AnimationController<P, O> {
    pub fn new(presenter: P, observer: O) -> Self {
        Self {
            presenter,
            observer,
            animation: None,
        }
    }

    pub fn generate(&mut self, config: &MandelbrotConfig) -> Result<(), Box<dyn Error>> {
        self.animation = Some(render_animation(config, &self.observer)?);

        Ok(())
    }

    #[must_use]
    pub fn animation(&self) -> Option<&Animation> {
        self.animation.as_ref()
    }

    /// Hands the last generated animation to the presenter. Does nothing if
    /// [`generate`](Self::generate) has not succeeded yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), P::Error> {
        if let Some(animation) = &self.animation {
            self.observer.encode_started(animation.len());
            self.presenter.present(animation, filepath)?;
        }

        Ok(())
    }
}
