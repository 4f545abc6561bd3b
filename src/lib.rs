//! FluxML Rust Library
//!
//! This library provides the measurement data layer of FluxML models used in
//! 13C metabolic flux analysis, including:
//! - Parsing MS, MS/MS, 1H-NMR, 13C-NMR and generic measurement specifications
//! - Storing measured values and standard deviations per measurement entry
//! - Transforming isotopomer vectors into cumomer vectors and back
//! - Converting atom masks to and from range notation

#![warn(unused_imports)]

/// Commonly used types and functionality re-exported for convenience
pub mod prelude {
    pub use crate::math::*;
    pub use crate::mgroup::*;
}

/// Measurement groups and the specification grammars
pub mod mgroup {
    pub use crate::mgroup::cnmr::CNMRGroup;
    pub use crate::mgroup::dispatch::{parse_mgroup, MGroup};
    pub use crate::mgroup::error::MGroupError;
    pub use crate::mgroup::flux::FluxGroup;
    pub use crate::mgroup::generic::GenericGroup;
    pub use crate::mgroup::group::{GroupData, MGroupKind, MeasurementGroup};
    pub use crate::mgroup::hnmr::HNMRGroup;
    pub use crate::mgroup::keys::*;
    pub use crate::mgroup::ms::MSGroup;
    pub use crate::mgroup::msms::MSMSGroup;

    /// 13C-NMR multiplet groups
    pub mod cnmr;
    /// Grammar dispatch and the type-erased group
    pub mod dispatch;
    /// Error types for parsing and entry access
    pub mod error;
    /// Flux value groups
    pub mod flux;
    /// Row based fallback groups
    pub mod generic;
    /// Shared storage and access contract
    pub mod group;
    /// 1H-NMR position groups
    pub mod hnmr;
    /// Semantic entry keys
    pub mod keys;
    /// Mass spectrometry groups
    pub mod ms;
    /// Tandem mass spectrometry groups
    pub mod msms;
    mod patterns;
}

/// Numeric helpers for labeling state vectors
pub mod math {
    pub use crate::math::cumomer::*;
    pub use crate::math::error::MathError;
    pub use crate::math::integer::*;
    pub use crate::math::range::*;

    /// Isotopomer/cumomer transform
    pub mod cumomer;
    pub mod error;
    /// Integer number theory helpers
    pub mod integer;
    /// Atom mask range notation
    pub mod range;
}

/// Tabular display of measurement groups
pub mod info;
