//! Linear algebra for the Lumen renderer.
//!
//! Lumen needs to move geometry from object space through camera space into
//! clip space every frame, and the math types involved show up in public
//! APIs. This crate provides exactly that surface and nothing more:
//!
//! - Generic, dimension-parameterized [`Vector`] types with the algebra the
//!   camera path needs (dot and cross products, lengths, normalization).
//! - A column-major [`Matrix`] type with column-level access.
//! - The two camera matrix constructors, [`view_matrix`] and
//!   [`projection_matrix`].
//!
//! # Goals & Non-Goals
//!
//! - Rely on const generics for vector and matrix dimensions; no
//!   dynamically-sized objects.
//! - Support only a single, column-major, unpadded data layout, so that
//!   every type can be handed to the GPU as-is (via [`bytemuck::Pod`]).
//! - Be generic over the element type, but only over [`Copy`] scalars.
//! - Stay a leaf dependency: no renderer, scene or windowing concerns, no
//!   matrix inversion, no quaternions. Consumers that need interop with
//!   other math libraries can enable the `mint` feature.
//!
//! Every operation is a pure function of its inputs; there is no global
//! state anywhere in the crate.

mod camera;
#[cfg(feature = "mint")]
mod interop;
mod matrix;
mod traits;
mod vector;

pub use camera::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
