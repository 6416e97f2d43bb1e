//! # Library examples
//!
//! We provide some examples in the `demos` subdirectory. To run them
//! use `cargo run --example <example_name>`. Set `RUST_LOG=debug` to see
//! the log output of the library.
//!
//! ### Denoising a straight line.
//!
//! A line of 50 points is repeated in 5 columns, giving a rank one matrix. Seeded
//! Gaussian noise is added and removed again by a rank one truncated SVD. The
//! example prints both reconstruction errors and plots the true, noisy and denoised
//! first column into `denoising.png`.
//! The corresponding code is in the file `denoise_line.rs`.
//!
//! ### Singular value spectrum.
//!
//! Prints the singular values of the noisy matrix from the denoising example and the
//! rank chosen by each truncation policy. The code is in `svd_spectrum.rs`.
//!
//! ### Entropy against compression.
//!
//! Compares the entropy bound of several text samples with the sizes produced by
//! gzip and bzip2 and draws the character probability distribution of an English
//! sentence into `char_probabilities.png`. The code is in `entropy_comparison.rs`.
