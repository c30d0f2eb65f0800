mod config;
mod describe;
mod run;
