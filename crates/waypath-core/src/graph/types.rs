use std::fmt::Debug;

/// Numeric weight carried by an edge.
///
/// Path costs are accumulated as `f64`, so every weight type must convert
/// into one. Weights are expected to be non-negative; negative weights are
/// not checked and make shortest-path results meaningless.
pub trait EdgeWeight: Copy + PartialEq + Debug {
    fn cost(self) -> f64;
}

macro_rules! impl_edge_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                fn cost(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_edge_weight!(f64, f32, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Sum of edge weights along consecutive nodes of a path
pub fn path_weight<W: EdgeWeight>(legs: &[W]) -> f64 {
    legs.iter().map(|w| w.cost()).sum()
}
