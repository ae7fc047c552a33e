use crate::{
    assets::source::ImageSource,
    foundation::error::{PosterError, PosterResult},
    poster::{
        generator::{GenerationRequest, PosterGenerator, generate_one},
        model::FormData,
        prompt::build_prompt,
    },
    render::compositor::{CompositeRequest, CompositeResult, composite},
};

/// Message shown to users when the external generator fails.
pub const GENERATION_FAILED_MESSAGE: &str = "failed to generate poster, please try again";

/// A finished poster, ready to display or save as [`crate::DOWNLOAD_FILE_NAME`].
#[derive(Clone, Debug)]
pub struct PosterOutput {
    /// Encoded poster: the composite when a logo was supplied, else the generated image.
    pub image: ImageSource,
    /// Compositing details when a logo was applied.
    pub composite: Option<CompositeResult>,
}

impl PosterOutput {
    /// Whether a logo was drawn onto the generated poster.
    pub fn is_composited(&self) -> bool {
        self.composite.is_some()
    }
}

/// Generate a poster for `form` and composite its logo, if any.
///
/// Every call is independent: a failure never falls back to an earlier result.
#[tracing::instrument(skip_all, fields(platform = %form.platform.platform_name))]
pub fn produce_poster(
    form: &FormData,
    generator: &dyn PosterGenerator,
) -> PosterResult<PosterOutput> {
    let format = form.format()?;
    let request = GenerationRequest::new(build_prompt(form), format.aspect_ratio);

    let poster = generate_one(generator, &request).map_err(|e| {
        tracing::warn!(error = %e, "poster generation failed");
        PosterError::generation(GENERATION_FAILED_MESSAGE)
    })?;

    let logo = match form.style.logo_image.as_deref() {
        Some(uri) if form.style.has_logo() => ImageSource::from_data_uri(uri),
        _ => {
            tracing::info!("no logo supplied, returning generated poster");
            return Ok(PosterOutput {
                image: poster,
                composite: None,
            });
        }
    };

    tracing::info!("adding logo");
    let result = composite(CompositeRequest::new(
        poster,
        logo,
        form.style.logo_placement.clone(),
    ))?;

    Ok(PosterOutput {
        image: result.clone().into_image_source(),
        composite: Some(result),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/poster/pipeline.rs"]
mod tests;
