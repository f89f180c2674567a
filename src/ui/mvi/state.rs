/// Everything a catalog view needs to draw itself.
///
/// `Default` is the state of a freshly mounted screen. `PartialEq` lets tests
/// assert that a dropped response left the state untouched.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
