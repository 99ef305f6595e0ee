use kakuro_core::CoreError;

#[derive(thiserror::Error, Debug)]
pub enum IoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[cfg(feature = "io-rkyv")]
    #[error(transparent)]
    Rkyv(#[from] rkyv::rancor::Error),

    #[error("invalid combination cache magic")]
    InvalidCacheMagic,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
