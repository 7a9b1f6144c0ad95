mod chart;
mod chrome;
mod image;
mod notice;
mod pages;
mod portfolio;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use portfolio::{PortfolioRoot, PortfolioScreen};
