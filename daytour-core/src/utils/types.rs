/// Alias to a scalar floating type.
///
/// NOTE: Currently, prefer to use `f64` as a default floating type as switching to `f32` leads
/// to precision issues in cost accumulation over long routes. No clear performance benefits
/// were found.
pub type Float = f64;
