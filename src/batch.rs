//! Concurrent batch analysis.

use futures::future::try_join_all;
use tracing::debug;

use crate::analysis::ClothingAnalysis;
use crate::client::ImageAnnotator;
use crate::error::Result;

/// Analyze a batch of base64-encoded images concurrently.
///
/// Produces one [`ClothingAnalysis`] per input image, in input order.
/// The batch is all-or-nothing: the first failing request resolves the
/// join with its error and drops the in-flight siblings, so no partial
/// results are ever returned. An empty batch completes without issuing
/// any request.
pub async fn analyze_batch<A>(annotator: &A, images: &[String]) -> Result<Vec<ClothingAnalysis>>
where
    A: ImageAnnotator + ?Sized,
{
    if images.is_empty() {
        return Ok(Vec::new());
    }

    debug!(batch_size = images.len(), "analyzing image batch");

    try_join_all(images.iter().map(|image| async move {
        let annotation = annotator.annotate(image).await?;
        Ok(ClothingAnalysis::from_annotation(&annotation))
    }))
    .await
}
