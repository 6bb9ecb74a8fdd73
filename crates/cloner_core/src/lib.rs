//! Cloner core: pure request coordinator and view-model helpers.
mod effect;
mod error;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use error::CloneError;
pub use msg::Msg;
pub use state::{AppState, CloneResult, RequestId, Tab, Theme, DEFAULT_URL};
pub use update::update;
pub use view_model::{
    AppViewModel, OutputView, EMPTY_MESSAGE, LOADING_MESSAGE, SUBMIT_LABEL, SUBMIT_LABEL_LOADING,
};
