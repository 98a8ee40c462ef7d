//! Query modules for collections stored in Redis.

pub mod items;
