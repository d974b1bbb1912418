use glam::IVec2;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("obstacle sequences are empty")]
    EmptyInput,
    #[error("obstacle sequences differ in length: {x_len} x values, {y_len} y values")]
    MismatchedInput { x_len: usize, y_len: usize },
    #[error("resolution must be finite and positive, got {0}")]
    InvalidResolution(f64),
    #[error("obstacle {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("cell {cell} out of bounds for grid {width}x{height}")]
    OutOfBounds {
        cell: IVec2,
        width: u32,
        height: u32,
    },
    #[error("degenerate grid {width}x{height}")]
    DegenerateGrid { width: u32, height: u32 },
    #[error("invalid grid data: {0}")]
    InvalidData(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("scan parse error: {0}")]
    ScanParse(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
