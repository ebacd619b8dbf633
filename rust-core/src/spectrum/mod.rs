//! Spectral editing: transform, masking, ranking and residuals

pub mod types;
pub mod fft;
pub mod mask;
pub mod ranking;
pub mod residual;
pub mod editor;

pub use types::{num_bins, RankedBin, Spectrum};
pub use fft::SpectralTransform;
pub use ranking::rank;
pub use residual::difference;
pub use editor::{BinEditor, EditorState};
