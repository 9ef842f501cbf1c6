pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("scene '{scene}' contains no shapes")]
    EmptyScene { scene: String },

    #[error("{shape} at ({x}, {y}) escapes the {width} x {height} unit canvas")]
    OutOfBounds {
        shape: &'static str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}
