use crate::{
    assets::source::ImageSource,
    foundation::error::{PosterError, PosterResult},
    poster::model::AspectRatio,
};

/// Model name requested from the external text-to-image service.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// What the external generator is asked to produce.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Service model name; [`DEFAULT_IMAGE_MODEL`] unless overridden.
    pub model: String,
    /// Brief from [`crate::build_prompt`].
    pub prompt: String,
    /// Output shape.
    pub aspect_ratio: AspectRatio,
    /// Always 1 for posters.
    pub number_of_images: u32,
    /// Encoding of the returned image.
    pub output_mime_type: String,
}

impl GenerationRequest {
    /// A single-image JPEG request for `prompt` at `aspect_ratio`.
    pub fn new(prompt: String, aspect_ratio: AspectRatio) -> Self {
        Self {
            model: DEFAULT_IMAGE_MODEL.to_string(),
            prompt,
            aspect_ratio,
            number_of_images: 1,
            output_mime_type: "image/jpeg".to_string(),
        }
    }
}

/// External text-to-image collaborator.
///
/// Implementations own transport, credentials, and retries; posterkit only
/// needs one encoded poster back per request.
pub trait PosterGenerator: Send + Sync {
    /// Produce the images for `request`, in the order the service returned them.
    fn generate(&self, request: &GenerationRequest) -> PosterResult<Vec<ImageSource>>;
}

/// Run `generator` and keep the first image; an empty response is an error.
#[tracing::instrument(skip(generator, request), fields(aspect_ratio = %request.aspect_ratio))]
pub fn generate_one(
    generator: &dyn PosterGenerator,
    request: &GenerationRequest,
) -> PosterResult<ImageSource> {
    generator
        .generate(request)?
        .into_iter()
        .next()
        .ok_or_else(|| PosterError::generation("image generation returned no images"))
}

/// A generator that always hands back the same poster.
///
/// Used to plug an externally produced poster (for example a file on disk)
/// into the pipeline.
#[derive(Clone, Debug)]
pub struct StaticPosterGenerator {
    poster: ImageSource,
}

impl StaticPosterGenerator {
    /// Serve `poster` for every request.
    pub fn new(poster: ImageSource) -> Self {
        Self { poster }
    }
}

impl PosterGenerator for StaticPosterGenerator {
    fn generate(&self, request: &GenerationRequest) -> PosterResult<Vec<ImageSource>> {
        tracing::debug!(
            prompt_len = request.prompt.len(),
            "serving static poster for generation request"
        );
        Ok(vec![self.poster.clone()])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/poster/generator.rs"]
mod tests;
