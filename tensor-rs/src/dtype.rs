use std::fmt;

/// Scalar type tag of tensor elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dtype {
    Bool,
    UInt8,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl Dtype {
    /// Size of a single scalar in bytes.
    pub fn byte_size(&self) -> usize {
        match self {
            Dtype::Bool | Dtype::UInt8 => 1,
            Dtype::Int32 | Dtype::Float32 => 4,
            Dtype::Int64 | Dtype::Float64 => 8,
        }
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A scalar type which can be stored in a tensor.
pub trait Element: Copy + Default + PartialEq + fmt::Debug + Send + Sync + 'static {
    const DTYPE: Dtype;
}

macro_rules! impl_element {
    ($($ty:ty => $dtype:ident),+ $(,)?) => {
        $(
            impl Element for $ty {
                const DTYPE: Dtype = Dtype::$dtype;
            }
        )+
    };
}

impl_element!(
    bool => Bool,
    u8 => UInt8,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
);
