mod difficulty;
mod region;
mod user;
mod walk;
