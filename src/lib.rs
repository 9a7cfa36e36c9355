//! # stylescan
//!
//! Clothing image analysis for fashion apps, backed by the Google Cloud
//! Vision API.
//!
//! One annotate request per image collects labels, dominant colors and
//! web entities; a pure aggregation layer turns the response into a
//! [`ClothingAnalysis`] (detected garments, named colors, style
//! descriptors, a confidence score) and a fixed rule table derives
//! styling [`suggestions`] from it. Batches fan out concurrently and
//! fail as a unit.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use stylescan::{suggestions, VisionClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), stylescan::VisionError> {
//!     let client = VisionClient::from_env()?;
//!
//!     let analysis = client.analyze(&image_base64).await?;
//!     println!("items: {:?}, colors: {:?}", analysis.items, analysis.colors);
//!
//!     for tip in suggestions(&analysis) {
//!         println!("{tip}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The client is an explicit dependency: construct it once where the
//! application wires its services and pass it down. The parsing and
//! classification layers ([`ClothingAnalysis::from_annotation`],
//! [`color_name`], [`suggestions`]) are pure and need no client at all.

pub mod analysis;
pub mod annotation;
pub mod batch;
pub mod client;
pub mod color;
pub mod config;
pub mod error;
pub mod suggest;

pub use analysis::ClothingAnalysis;
pub use annotation::ImageAnnotation;
pub use batch::analyze_batch;
pub use client::{encode_image, ImageAnnotator, VisionClient};
pub use color::color_name;
pub use config::{VisionConfig, VisionConfigBuilder};
pub use error::{Result, VisionError};
pub use suggest::suggestions;
