use std::path::PathBuf;
use std::time::Duration;

use portfolio_core::model::{Section, Variant};

use crate::catalog::CatalogSource;
use crate::random::RandomSource;

/// Delay between sort animation frames.
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(100);

/// Startup configuration shared by every session of the running app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioConfig {
    pub variant: Variant,
    pub assets_dir: PathBuf,
    pub catalog: CatalogSource,
    pub initial_section: Section,
    pub step_delay: Duration,
    pub random: RandomSource,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            assets_dir: PathBuf::from("assets"),
            catalog: CatalogSource::Builtin,
            initial_section: Section::Home,
            step_delay: DEFAULT_STEP_DELAY,
            random: RandomSource::Entropy,
        }
    }
}
