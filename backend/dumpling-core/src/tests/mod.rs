mod body;
mod credential;
mod operation;
