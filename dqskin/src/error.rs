//! Skinning errors

/// Configuration errors reported at the construction or update boundary.
///
/// Every variant is raised before any output buffer is touched.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    /// Pose bone count differs from the count fixed at construction
    #[error("pose has {actual} bones, skinner was built for {expected}")]
    BoneCountMismatch { expected: usize, actual: usize },

    /// Parent index points past the end of the bone list
    #[error("bone {bone} has parent {parent}, but the skeleton only has {bone_count} bones")]
    ParentOutOfRange {
        bone: usize,
        parent: usize,
        bone_count: usize,
    },

    /// Serialized parent index is negative but not the root marker
    #[error("bone {bone} has invalid parent index {parent} (roots use -1)")]
    InvalidParentIndex { bone: usize, parent: i32 },

    /// Parent index does not fit the serialized i32 form
    #[error("bone {bone} has parent {parent}, which does not fit a serialized parent index")]
    ParentNotSerializable { bone: usize, parent: usize },

    /// Processing order names a bone that does not exist
    #[error("processing order names bone {index}, but the skeleton only has {bone_count} bones")]
    OrderOutOfRange { index: usize, bone_count: usize },

    /// Bone lists itself as its own parent
    #[error("bone {bone} is its own parent")]
    SelfParent { bone: usize },

    /// Parent is processed after the child
    #[error("bone {bone} is processed before its parent {parent}")]
    ParentAfterChild { bone: usize, parent: usize },

    /// Parent links form a loop
    #[error("bone {bone} is part of a parent cycle")]
    HierarchyCycle { bone: usize },

    /// World bind scale has a zero (or near-zero) component
    #[error("bone {bone} has degenerate bind scale {scale:?}")]
    DegenerateScale { bone: usize, scale: [f32; 3] },

    /// World bind transform contains NaN or infinity
    #[error("bone {bone} has a non-finite bind transform")]
    NonFinite { bone: usize },

    /// Config file could not be parsed
    #[error("failed to parse skinning config: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file could not be read
    #[error("failed to read skinning config: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SkinError>;
