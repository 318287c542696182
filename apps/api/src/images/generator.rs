//! Image generation: the prompt goes to the image model verbatim.

use crate::images::models::{GeneratedImage, ImageSize};
use crate::llm_client::{LlmClient, LlmError};

pub async fn generate_image(
    llm: &LlmClient,
    prompt: &str,
    size: ImageSize,
) -> Result<GeneratedImage, LlmError> {
    let blob = llm.generate_image(prompt, size.as_str()).await?;
    Ok(GeneratedImage::new(blob, size))
}
