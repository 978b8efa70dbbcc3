//! Render assembly for Splide carousel configurations.
//!
//! Consumes stored [`CarouselConfig`](carousel_config::CarouselConfig)
//! records and produces everything a page needs to mount the widget: the
//! markup skeleton, the mount-point selector, the compiled options payload
//! for the client bootstrap, derived affordances, and cache metadata tied
//! to the record and its content sources.
//!
//! Content comes from injected collaborators: a [`ContentResolver`] for
//! item-list sources and a [`QueryRunner`] for query-display sources.
//! Disabled configurations and unresolvable content produce empty output,
//! never errors.

pub mod assembler;
pub mod blocks;
pub mod cache;
pub mod collaborators;
pub mod errors;
pub mod selector;
pub mod skeleton;

// Re-export for convenient access
pub use assembler::{AutoplayToggle, CarouselAssembler, RenderedCarousel};
pub use blocks::{derive_block_definitions, BlockDefinition, CarouselBlock};
pub use cache::{config_cache_tag, CacheMetadata};
pub use collaborators::{ContentResolver, QueryOutput, QueryRunner, ResolvedItem};
pub use errors::{RenderError, RenderResult};
pub use selector::{resolve_selector, Selector};
pub use skeleton::SkeletonRenderer;
