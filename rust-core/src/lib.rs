//! Spectral Editor - frequency-domain editing of sampled signals
//! 
//! Load a real-valued series, suppress individual frequency bins or keep only
//! the lowest/strongest ones, and reconstruct the edited signal for comparison
//! with the original. Python bindings are available with the `python` feature.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod config;
pub mod error;
pub mod io;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use config::{EditorConfig, ExportConfig, LoaderConfig};
pub use error::{Result, SpectralError};
pub use spectrum::{BinEditor, EditorState, RankedBin, SpectralTransform, Spectrum};
