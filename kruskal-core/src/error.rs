//! Error types for the Kruskal core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

use std::{fmt, io};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while parsing an adjacency matrix.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input did not start with a vertex count.
    #[error("input does not contain a vertex count")]
    MissingVertexCount,
    /// The leading token could not be read as a vertex count.
    #[error("vertex count `{token}` is not a non-negative integer")]
    InvalidVertexCount {
        /// The offending token.
        token: String,
    },
    /// The requested matrix does not fit in memory on this platform.
    #[error("a {vertex_count}x{vertex_count} matrix exceeds capacity limits")]
    CapacityOverflow {
        /// Vertex count read from the input.
        vertex_count: usize,
    },
    /// A matrix entry could not be read as a non-negative integer weight.
    #[error("entry ({row}, {column}) `{token}` is not a non-negative integer weight")]
    InvalidWeight {
        /// Row of the offending entry.
        row: usize,
        /// Column of the offending entry.
        column: usize,
        /// The offending token.
        token: String,
    },
    /// Reading from the underlying source failed.
    #[error("failed to read adjacency matrix: {0}")]
    Io(#[from] io::Error),
}

define_error_codes! {
    /// Stable codes describing [`LoadError`] variants.
    enum LoadErrorCode for LoadError {
        /// The input did not start with a vertex count.
        MissingVertexCount => MissingVertexCount => "LOAD_MISSING_VERTEX_COUNT",
        /// The leading token could not be read as a vertex count.
        InvalidVertexCount => InvalidVertexCount { .. } => "LOAD_INVALID_VERTEX_COUNT",
        /// The requested matrix does not fit in memory on this platform.
        CapacityOverflow => CapacityOverflow { .. } => "LOAD_CAPACITY_OVERFLOW",
        /// A matrix entry could not be read as a non-negative integer weight.
        InvalidWeight => InvalidWeight { .. } => "LOAD_INVALID_WEIGHT",
        /// Reading from the underlying source failed.
        Io => Io(..) => "LOAD_IO",
    }
}

/// Error type produced when building a minimum spanning tree.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum KruskalError {
    /// Not every vertex is reachable from vertex 0, so no spanning tree exists.
    #[error("graph is disconnected: {reached} of {vertex_count} vertices reachable from vertex 0")]
    Disconnected {
        /// Number of vertices in the graph.
        vertex_count: usize,
        /// Number of vertices reached by the traversal from vertex 0.
        reached: usize,
    },
    /// An edge referenced a vertex outside the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidVertex {
        /// The out-of-range vertex.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The adjacency matrix could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

define_error_codes! {
    /// Stable codes describing [`KruskalError`] variants.
    enum KruskalErrorCode for KruskalError {
        /// Not every vertex is reachable from vertex 0.
        Disconnected => Disconnected { .. } => "KRUSKAL_DISCONNECTED",
        /// An edge referenced a vertex outside the graph.
        InvalidVertex => InvalidVertex { .. } => "KRUSKAL_INVALID_VERTEX",
        /// The adjacency matrix could not be loaded.
        LoadFailure => Load(..) => "KRUSKAL_LOAD_FAILURE",
    }
}

impl KruskalError {
    /// Retrieve the inner [`LoadErrorCode`] when the error originated in the loader.
    #[must_use]
    pub const fn load_code(&self) -> Option<LoadErrorCode> {
        match self {
            Self::Load(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, KruskalError>;
