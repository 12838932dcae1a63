mod graph;
mod prove;
mod run;
mod server;
