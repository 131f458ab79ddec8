pub mod classification;
pub mod provider;
