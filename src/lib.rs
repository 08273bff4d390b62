pub mod constants;
pub mod maze;
pub mod player;
pub mod route;
pub mod score;
pub mod session;
pub mod trail;
