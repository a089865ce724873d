use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreakError>;

#[derive(Error, Debug)]
pub enum StreakError {
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    Decode(#[from] gix::objs::decode::Error),
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Store error: {0}")]
    Store(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::discover::Error> for StreakError {
    fn from(err: gix::discover::Error) -> Self {
        StreakError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for StreakError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        StreakError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for StreakError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        StreakError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for StreakError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        StreakError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for StreakError {
    fn from(err: gix::object::commit::Error) -> Self {
        StreakError::Commit(Box::new(err))
    }
}
