#![forbid(unsafe_code)]

pub mod assets;
pub mod catalog;
pub mod config;
pub mod error;
pub mod portfolio;
pub mod random;

pub use portfolio_core::Clock;

pub use assets::{AssetStore, FsAssetStore, InMemoryAssetStore, resolve_image};
pub use catalog::{CatalogSource, builtin_catalog, load_catalog};
pub use config::{DEFAULT_STEP_DELAY, PortfolioConfig};
pub use error::{CatalogLoadError, PortfolioError};
pub use portfolio::{Notice, NoticeTone, PortfolioEvent, PortfolioService, Selection, Transition};
pub use random::RandomSource;
