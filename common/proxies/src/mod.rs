#![no_std]

pub mod proxy_farm;
pub mod proxy_oracle;
pub mod proxy_pair;
pub mod proxy_strategy;
pub mod proxy_vault;
pub mod proxy_worker;
