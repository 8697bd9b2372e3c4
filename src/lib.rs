//! Vector, matrix, and quaternion math for GPU-oriented graphics applications.
//!
//! # Motivation
//!
//! Graphics code needs a small, predictable set of linear algebra types
//! (cameras, object transforms, projections), and it needs to hand those
//! types to the GPU without a conversion step. This library provides exactly
//! that set and nothing more.
//!
//! General-purpose linear algebra libraries tend to be a poor fit here:
//!
//! - Some aim for maximum flexibility (dynamic dimensions, arbitrary element
//!   storage) and pay a complexity cost for capabilities graphics code never
//!   uses.
//! - Many use mathematically conventional but GPU-incompatible memory
//!   layouts, forcing a repacking step before every buffer upload.
//! - Some follow GL-era conventions (clip-space depth -1..1) that are wrong
//!   for current APIs.
//!
//! # Goals & Non-Goals
//!
//! - Support only fixed, small dimensions: 2/3/4-component vectors, 3x3 and
//!   4x4 matrices, quaternions. Const generics keep the vector API uniform;
//!   the matrix types are concrete because their memory layouts are not.
//! - Use column-major, GPU-upload-compatible layouts exclusively. The 3x3
//!   matrix is stored padded to 12 elements, matching how `mat3x3<f32>` is
//!   laid out in WGSL uniform and storage buffers, and every type can be
//!   cast to raw bytes via [`bytemuck`].
//! - Be generic over the element type (`f32` for the GPU, `f64` where
//!   host-side precision matters), but don't try to support non-[`Copy`]
//!   numeric types.
//! - Match GPU shader numeric semantics: operations prefer well-defined
//!   fallback values (zero vectors, non-finite matrix elements) over panics
//!   or `Result`s. See the individual operations for the exact rules.
//! - Projection conventions are those of WebGPU and similar APIs: right
//!   handed, cameras look down -Z, clip-space depth covers 0..1.

pub mod approx;
mod matrix;
mod quat;
mod scalar;
mod traits;
mod vector;

pub use matrix::*;
pub use quat::*;
pub use scalar::*;
pub use traits::*;
pub use vector::*;
