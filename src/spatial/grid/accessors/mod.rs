mod links;
mod state;
