pub mod console_report;
pub mod cutoff;
pub mod data_export;
pub mod filter_bank;
pub mod fourier;
pub mod freq_response;
pub mod study;
pub mod sweep;
pub mod types;
pub mod waveforms;

#[cfg(feature = "plots")]
pub mod plot_render;
