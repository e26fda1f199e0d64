//! Decoding of GX vertex attribute streams.
//!
//! A draw call on the GX describes its vertices with a vertex descriptor and a vertex attribute
//! table, which together determine which attributes each vertex has, how they are addressed and
//! in which numeric format they are stored. This crate turns such a stream into host vertices of
//! a fixed layout, see [`VertexLayout`].
//!
//! Decoding goes through a [`DispatchTable`], which holds a decoder per [`FormatDescriptor`]:
//! - specialized decoders, generated ahead of time by `vtxgen` for the descriptors a title is
//!   known to use, and
//! - composed decoders, built from the [`Plan`] of a descriptor the first time it is seen.
//!
//! Both execute the same attribute readers in the same order and produce identical output, for
//! every SIMD [`TierLevel`].

mod bbox;
mod color;
mod compose;
mod cursor;
mod descriptor;
mod dispatch;
mod layout;
mod plan;
mod profile;
mod reader;
mod specialize;
mod tier;

pub mod convert;
pub mod format;
pub mod titles;

pub use bbox::BoundingBox;
pub use cursor::{ArrayDescriptor, Arrays, DecodeError, DecodeOutput, DecodeParams};
pub use descriptor::{AttributeSlot, DescriptorError, FormatDescriptor};
pub use dispatch::{DispatchError, DispatchError as Error, DispatchTable, Draw, Settings, Stat};
pub use layout::{TexCoordLayout, VertexLayout, tail_size};
pub use plan::{Access, Codec, Numeric, Plan, Step};
pub use profile::{Profile, ProfileEntry, ProfileError};
pub use specialize::TitleTable;
pub use tier::TierLevel;
