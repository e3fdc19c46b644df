#![allow(dead_code)]

pub mod query_server;
