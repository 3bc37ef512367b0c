pub mod config;
pub mod error;
pub mod state {
    pub mod carousel;
    pub mod navbar;
    pub mod reveal;
    pub mod stepper;
    pub mod subscription;
}
pub mod scroll;
pub mod subscribe;
pub mod offline {
    pub mod cache;
    pub mod manifest;
    pub mod web;
}
pub mod worker;
