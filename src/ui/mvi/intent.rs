/// Something a screen reacts to: a key the user pressed or an API result
/// routed back by generation.
pub trait Intent: Send + 'static {}
