use crate::relay::ChatRelay;

pub struct AppState {
    pub relay: ChatRelay,
}
