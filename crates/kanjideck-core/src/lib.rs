pub mod edict;
pub mod error;
pub mod examples;
pub mod styler;
pub mod wordfreq;
