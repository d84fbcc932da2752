#![allow(dead_code)]

pub mod mock_server;
pub mod pcrec_env;
