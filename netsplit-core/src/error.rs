//! Error types for the netsplit core library.
//!
//! Defines the error enums exposed by the public API, their stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::ids::{ComponentId, EdgeId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A bookkeeping contract violation reported by [`crate::ComponentStore`].
///
/// These never describe bad input. They mean the caller handed the store a
/// component identity that does not match its current state.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum StoreError {
    /// A merge named the same component as both source and destination.
    #[error("cannot merge component {component} into itself")]
    SelfMerge {
        /// The component passed on both sides of the merge.
        component: ComponentId,
    },
    /// The component was never allocated or has already been absorbed.
    #[error("component {component} is not live")]
    NotLive {
        /// The retired or unknown component.
        component: ComponentId,
    },
    /// An edge that already has an owner was attached to a component.
    #[error("edge {edge} is already owned by component {owner}")]
    EdgeAlreadyHomed {
        /// The edge that was attached twice.
        edge: EdgeId,
        /// The component currently owning the edge.
        owner: ComponentId,
    },
}

define_error_codes! {
    /// Stable codes describing [`StoreError`] variants.
    enum StoreErrorCode for StoreError {
        /// A merge named the same component on both sides.
        SelfMerge => SelfMerge { .. } => "STORE_SELF_MERGE",
        /// The component was never allocated or has been absorbed.
        NotLive => NotLive { .. } => "STORE_NOT_LIVE",
        /// An owned edge was attached again.
        EdgeAlreadyHomed => EdgeAlreadyHomed { .. } => "STORE_EDGE_ALREADY_HOMED",
    }
}

/// Error type produced when configuring or running a [`crate::Splitter`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetsplitError {
    /// Progress batch size must be greater than zero.
    #[error("batch_size must be at least 1 (got {got})")]
    InvalidBatchSize {
        /// The invalid batch size supplied by the caller.
        got: usize,
    },
    /// The component bookkeeping became inconsistent during a pass.
    #[error("component store contract violated: {source}")]
    ContractViolation {
        /// Underlying store failure.
        #[from]
        source: StoreError,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetsplitError`] variants.
    enum NetsplitErrorCode for NetsplitError {
        /// Progress batch size must be greater than zero.
        InvalidBatchSize => InvalidBatchSize { .. } => "NETSPLIT_INVALID_BATCH_SIZE",
        /// The component bookkeeping became inconsistent during a pass.
        ContractViolation => ContractViolation { .. } => "NETSPLIT_CONTRACT_VIOLATION",
    }
}

impl NetsplitError {
    /// Retrieve the inner [`StoreErrorCode`] when the error originated in the
    /// [`crate::ComponentStore`].
    #[must_use]
    pub const fn store_code(&self) -> Option<StoreErrorCode> {
        match self {
            Self::ContractViolation { source } => Some(source.code()),
            Self::InvalidBatchSize { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetsplitError>;
