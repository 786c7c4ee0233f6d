mod admin;
mod setup;
